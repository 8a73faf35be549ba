//! Static copy and catalogs shared by every page and by the referral form.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Course {
    pub id: &'static str,
    pub label: &'static str,
}

pub const COURSES: &[Course] = &[
    Course { id: "web-development", label: "Web Development" },
    Course { id: "data-science", label: "Data Science" },
    Course { id: "mobile-dev", label: "Mobile Development" },
    Course { id: "ui-design", label: "UI/UX Design" },
];

pub fn find_course(id: &str) -> Option<&'static Course> {
    COURSES.iter().find(|course| course.id == id)
}

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Earn Rewards",
        description: "Get exclusive rewards for each successful referral. The more friends you bring, the more you earn.",
    },
    Feature {
        title: "Track Progress",
        description: "Monitor your referrals and rewards in real-time through your personalized dashboard.",
    },
    Feature {
        title: "Easy Sharing",
        description: "Share course recommendations with your friends in just a few clicks.",
    },
];

pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: &[Step] = &[
    Step {
        number: 1,
        title: "Pick a course",
        description: "Choose the course you think your friend will love.",
    },
    Step {
        number: 2,
        title: "Send the referral",
        description: "Fill in your details and your friend's, add a personal note if you like.",
    },
    Step {
        number: 3,
        title: "Get rewarded",
        description: "Once your friend enrolls, your reward is on its way.",
    },
];

pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
}

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        title: "Cash rewards",
        description: "Earn a reward for every friend who enrolls in a paid course.",
    },
    Benefit {
        title: "Course discounts",
        description: "Your friend starts with a discount on their first course.",
    },
    Benefit {
        title: "No limits",
        description: "Refer as many friends as you like. Every enrollment counts.",
    },
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Who can I refer?",
        answer: "Anyone who is not already enrolled in one of our courses.",
    },
    Faq {
        question: "When do I receive my reward?",
        answer: "We notify you as soon as your friend enrolls, and the reward follows shortly after.",
    },
    Faq {
        question: "Can I refer the same friend twice?",
        answer: "No. Each email address can only be referred once.",
    },
    Faq {
        question: "Which courses are eligible?",
        answer: "Web Development, Data Science, Mobile Development and UI/UX Design.",
    },
];

pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[Link] = &[
    Link { label: "Home", href: "#home" },
    Link { label: "How it Works", href: "#how" },
    Link { label: "Benefits", href: "#benefit" },
    Link { label: "FAQ", href: "#faq" },
];

pub struct LinkSection {
    pub title: &'static str,
    pub links: &'static [Link],
}

pub const FOOTER_SECTIONS: &[LinkSection] = &[
    LinkSection {
        title: "Company",
        links: &[
            Link { label: "About Us", href: "/about" },
            Link { label: "Careers", href: "/careers" },
            Link { label: "Contact", href: "/contact" },
            Link { label: "Blog", href: "/blog" },
        ],
    },
    LinkSection {
        title: "Resources",
        links: &[
            Link { label: "Help Center", href: "/help" },
            Link { label: "Testimonials", href: "/testimonials" },
            Link { label: "Terms of Service", href: "/terms" },
            Link { label: "FAQs", href: "/faqs" },
        ],
    },
    LinkSection {
        title: "Community",
        links: &[
            Link { label: "Discord", href: "#" },
            Link { label: "Twitter", href: "#" },
            Link { label: "GitHub", href: "#" },
            Link { label: "Newsletter", href: "#" },
        ],
    },
];

pub const SOCIAL_LINKS: &[Link] = &[
    Link { label: "Facebook", href: "#" },
    Link { label: "Twitter", href: "#" },
    Link { label: "Instagram", href: "#" },
    Link { label: "LinkedIn", href: "#" },
];

pub const LEGAL_LINKS: &[Link] = &[
    Link { label: "Privacy Policy", href: "/privacy" },
    Link { label: "Terms of Service", href: "/terms" },
    Link { label: "Cookie Policy", href: "/cookies" },
];

use serde::Serialize;

/// One referral as typed into the form.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReferralRequest {
    pub referrer_name: String,
    pub referrer_email: String,
    pub friend_name: String,
    pub friend_email: String,
    pub course: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReferralField {
    ReferrerName,
    ReferrerEmail,
    FriendName,
    FriendEmail,
    Course,
    Message,
}

impl ReferralField {
    pub const ALL: [ReferralField; 6] = [
        ReferralField::ReferrerName,
        ReferralField::ReferrerEmail,
        ReferralField::FriendName,
        ReferralField::FriendEmail,
        ReferralField::Course,
        ReferralField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReferralField::ReferrerName => "Your Name",
            ReferralField::ReferrerEmail => "Your Email",
            ReferralField::FriendName => "Friend's Name",
            ReferralField::FriendEmail => "Friend's Email",
            ReferralField::Course => "Select Course",
            ReferralField::Message => "Personal Message (Optional)",
        }
    }
}

impl ReferralRequest {
    pub fn get(&self, field: ReferralField) -> &str {
        match field {
            ReferralField::ReferrerName => &self.referrer_name,
            ReferralField::ReferrerEmail => &self.referrer_email,
            ReferralField::FriendName => &self.friend_name,
            ReferralField::FriendEmail => &self.friend_email,
            ReferralField::Course => &self.course,
            ReferralField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ReferralField, value: String) {
        let slot = match field {
            ReferralField::ReferrerName => &mut self.referrer_name,
            ReferralField::ReferrerEmail => &mut self.referrer_email,
            ReferralField::FriendName => &mut self.friend_name,
            ReferralField::FriendEmail => &mut self.friend_email,
            ReferralField::Course => &mut self.course,
            ReferralField::Message => &mut self.message,
        };
        *slot = value;
    }
}

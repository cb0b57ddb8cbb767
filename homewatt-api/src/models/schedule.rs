use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportScheduleRequest {
    /// Schedule name
    pub name: String,
    /// Name of the device the schedule switches, resolved within the imported house
    pub device: String,
    /// Switch-on time, `HH:MM`
    pub on_time: String,
    /// Switch-off time, `HH:MM`
    pub off_time: String,
    /// Days the schedule is active on
    #[serde(default)]
    pub days: Vec<Weekday>,
}

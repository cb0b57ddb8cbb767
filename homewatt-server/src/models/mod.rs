mod consumption_record;
mod device;
mod house;
mod house_consumption;
mod room;
mod schedule;
mod sub_room;

pub use consumption_record::{ConsumptionRecord, ConsumptionRecordTable};
pub use device::{Device, DeviceTable};
pub use house::{House, HouseTable};
pub use house_consumption::{HouseConsumption, HouseConsumptionTable};
pub use room::{Room, RoomTable};
pub use schedule::{Schedule, ScheduleTable};
pub use sub_room::{SubRoom, SubRoomTable};

pub trait Table {
    /// The name of the table
    fn name(&self) -> &'static str;

    /// The SQL statement to create the table
    fn create(&self) -> String;

    /// The SQL statement to dispose the table
    fn dispose(&self) -> String;

    /// The dependencies of the table
    fn dependencies(&self) -> Vec<&'static str>;
}

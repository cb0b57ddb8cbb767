mod consumption_record;
mod device;
mod house;
mod house_consumption;
mod room;
mod schedule;
mod sub_room;

pub use consumption_record::ConsumptionRecordRepository;
pub use device::DeviceRepository;
pub use house::HouseRepository;
pub use house_consumption::HouseConsumptionRepository;
pub use room::RoomRepository;
pub use schedule::ScheduleRepository;
pub use sub_room::SubRoomRepository;

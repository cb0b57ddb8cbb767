use std::collections::HashMap;

use crate::errors::HouseError;
use crate::models::{ConsumptionRecord, Device, House, Room, SubRoom};

/// Where a device sits inside its house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    House,
    Room { room_id: i32 },
    SubRoom { room_id: i32, sub_room_id: i32 },
}

#[derive(Debug, Clone)]
pub struct DeviceNode {
    pub device: Device,
    pub location: Location,
    /// Samples in stored order
    pub records: Vec<ConsumptionRecord>,
}

#[derive(Debug, Clone)]
pub struct RoomNode {
    pub room: Room,
    devices: Vec<usize>,
    sub_rooms: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct SubRoomNode {
    pub sub_room: SubRoom,
    devices: Vec<usize>,
}

/// Read-only snapshot of one house and everything it owns.
///
/// Rooms, sub-rooms and devices live in flat arenas; parents hold the arena
/// slots of their children in stored order. The `device id -> slot` index is
/// the single place that decides whether a device belongs to the house, so
/// ingest lookups and aggregation walks always agree on reachability.
#[derive(Debug, Clone)]
pub struct DeviceTree {
    house: House,
    rooms: Vec<RoomNode>,
    sub_rooms: Vec<SubRoomNode>,
    devices: Vec<DeviceNode>,
    house_devices: Vec<usize>,
    index: HashMap<i32, usize>,
}

impl DeviceTree {
    /// Links loaded rows into a tree.
    ///
    /// Rows are kept in the order given. Fails with `InvalidHouseStructure`
    /// when the house itself is missing or when a row points at a parent
    /// that is not part of this house.
    pub fn assemble(
        house_id: i32,
        house: Option<House>,
        rooms: Vec<Room>,
        sub_rooms: Vec<SubRoom>,
        devices: Vec<Device>,
        records: Vec<ConsumptionRecord>,
    ) -> Result<Self, HouseError> {
        let invalid = || HouseError::InvalidHouseStructure(house_id);

        let house = house.ok_or_else(invalid)?;

        let mut room_slots = HashMap::with_capacity(rooms.len());
        let rooms: Vec<RoomNode> = rooms
            .into_iter()
            .enumerate()
            .map(|(slot, room)| {
                room_slots.insert(room.id, slot);
                RoomNode {
                    room,
                    devices: Vec::new(),
                    sub_rooms: Vec::new(),
                }
            })
            .collect();

        let mut tree = Self {
            house,
            rooms,
            sub_rooms: Vec::with_capacity(sub_rooms.len()),
            devices: Vec::with_capacity(devices.len()),
            house_devices: Vec::new(),
            index: HashMap::with_capacity(devices.len()),
        };

        let mut sub_room_slots = HashMap::with_capacity(sub_rooms.len());
        for sub_room in sub_rooms {
            let room_slot = *room_slots.get(&sub_room.room_id).ok_or_else(invalid)?;
            let slot = tree.sub_rooms.len();

            sub_room_slots.insert(sub_room.id, slot);
            tree.rooms[room_slot].sub_rooms.push(slot);
            tree.sub_rooms.push(SubRoomNode {
                sub_room,
                devices: Vec::new(),
            });
        }

        for device in devices {
            if device.house_id != tree.house.id || tree.index.contains_key(&device.id) {
                return Err(invalid());
            }

            let slot = tree.devices.len();
            let location = match (device.room_id, device.sub_room_id) {
                (_, Some(sub_room_id)) => {
                    let sub_room_slot = *sub_room_slots.get(&sub_room_id).ok_or_else(invalid)?;
                    let room_id = tree.sub_rooms[sub_room_slot].sub_room.room_id;
                    tree.sub_rooms[sub_room_slot].devices.push(slot);

                    Location::SubRoom { room_id, sub_room_id }
                }
                (Some(room_id), None) => {
                    let room_slot = *room_slots.get(&room_id).ok_or_else(invalid)?;
                    tree.rooms[room_slot].devices.push(slot);

                    Location::Room { room_id }
                }
                (None, None) => {
                    tree.house_devices.push(slot);

                    Location::House
                }
            };

            tree.index.insert(device.id, slot);
            tree.devices.push(DeviceNode {
                device,
                location,
                records: Vec::new(),
            });
        }

        for record in records {
            let slot = *tree.index.get(&record.device_id).ok_or_else(invalid)?;
            tree.devices[slot].records.push(record);
        }

        Ok(tree)
    }

    pub fn house(&self) -> &House {
        &self.house
    }

    pub fn rooms(&self) -> impl Iterator<Item = &RoomNode> + '_ {
        self.rooms.iter()
    }

    /// Sub-rooms of `room` in stored order.
    pub fn sub_rooms<'a>(&'a self, room: &'a RoomNode) -> impl Iterator<Item = &'a SubRoomNode> + 'a {
        room.sub_rooms.iter().map(move |&slot| &self.sub_rooms[slot])
    }

    /// Looks a device up anywhere in the house.
    pub fn find_device(&self, device_id: i32) -> Option<&DeviceNode> {
        self.index.get(&device_id).map(|&slot| &self.devices[slot])
    }

    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Visits every device once: house-level devices first, then for each
    /// room its own devices followed by the devices of each of its sub-rooms.
    pub fn walk(&self) -> impl Iterator<Item = &DeviceNode> + '_ {
        let rooms = self.rooms.iter().flat_map(move |room| {
            let nested = room
                .sub_rooms
                .iter()
                .flat_map(move |&slot| self.sub_rooms[slot].devices.iter());

            room.devices.iter().chain(nested)
        });

        self.house_devices
            .iter()
            .chain(rooms)
            .map(move |&slot| &self.devices[slot])
    }
}

#[cfg(test)]
mod tests {
    use crate::consumption::tests::*;

    use super::*;

    fn names<'a>(devices: impl Iterator<Item = &'a DeviceNode>) -> Vec<&'a str> {
        devices.map(|node| node.device.name.as_str()).collect()
    }

    #[test]
    fn test_walk_order() {
        let tree = DeviceTree::assemble(
            1,
            Some(house(1)),
            vec![room(10, 1), room(11, 1)],
            vec![sub_room(100, 10), sub_room(101, 10), sub_room(110, 11)],
            vec![
                device(1, "kitchen-sub-b", Some(10), Some(101)),
                device(2, "hall", None, None),
                device(3, "kitchen", Some(10), None),
                device(4, "kitchen-sub-a", Some(10), Some(100)),
                device(5, "bedroom-sub", Some(11), Some(110)),
                device(6, "porch", None, None),
                device(7, "bedroom", Some(11), None),
            ],
            vec![],
        )
        .unwrap();

        assert_eq!(
            names(tree.walk()),
            vec![
                "hall",
                "porch",
                "kitchen",
                "kitchen-sub-a",
                "kitchen-sub-b",
                "bedroom",
                "bedroom-sub",
            ]
        );
        assert_eq!(tree.device_count(), 7);
    }

    #[test]
    fn test_walk_is_reproducible() {
        let tree = DeviceTree::assemble(
            1,
            Some(house(1)),
            vec![room(10, 1)],
            vec![sub_room(100, 10)],
            vec![
                device(1, "a", Some(10), Some(100)),
                device(2, "b", None, None),
                device(3, "c", Some(10), None),
            ],
            vec![],
        )
        .unwrap();

        assert_eq!(names(tree.walk()), names(tree.walk()));
        assert_eq!(names(tree.clone().walk()), names(tree.walk()));
    }

    #[test]
    fn test_empty_house() {
        let tree = DeviceTree::assemble(1, Some(house(1)), vec![], vec![], vec![], vec![]).unwrap();

        assert_eq!(tree.walk().count(), 0);
        assert_eq!(tree.house().id, 1);
    }

    #[test]
    fn test_room_without_devices() {
        let tree = DeviceTree::assemble(
            1,
            Some(house(1)),
            vec![room(10, 1), room(11, 1)],
            vec![sub_room(100, 11)],
            vec![device(1, "only", Some(11), Some(100))],
            vec![],
        )
        .unwrap();

        assert_eq!(names(tree.walk()), vec!["only"]);
        let room = tree.rooms().nth(1).unwrap();
        assert_eq!(tree.sub_rooms(room).count(), 1);
    }

    #[test]
    fn test_missing_house_is_invalid() {
        let result = DeviceTree::assemble(9, None, vec![], vec![], vec![], vec![]);

        assert!(matches!(result, Err(HouseError::InvalidHouseStructure(9))));
    }

    #[test]
    fn test_dangling_parent_is_invalid() {
        let result = DeviceTree::assemble(
            1,
            Some(house(1)),
            vec![room(10, 1)],
            vec![],
            vec![device(1, "lost", Some(99), None)],
            vec![],
        );
        assert!(matches!(result, Err(HouseError::InvalidHouseStructure(1))));

        let result = DeviceTree::assemble(
            1,
            Some(house(1)),
            vec![room(10, 1)],
            vec![sub_room(100, 77)],
            vec![],
            vec![],
        );
        assert!(matches!(result, Err(HouseError::InvalidHouseStructure(1))));
    }

    #[test]
    fn test_duplicate_device_is_invalid() {
        let result = DeviceTree::assemble(
            1,
            Some(house(1)),
            vec![room(10, 1)],
            vec![],
            vec![device(1, "twice", None, None), device(1, "twice", Some(10), None)],
            vec![],
        );

        assert!(matches!(result, Err(HouseError::InvalidHouseStructure(1))));
    }

    #[test]
    fn test_find_device_at_every_level() {
        let now = now();
        let tree = DeviceTree::assemble(
            1,
            Some(house(1)),
            vec![room(10, 1)],
            vec![sub_room(100, 10)],
            vec![
                device(1, "house", None, None),
                device(2, "room", Some(10), None),
                device(3, "sub", Some(10), Some(100)),
            ],
            vec![record(1, 3, now, 2.0)],
        )
        .unwrap();

        assert_eq!(tree.find_device(1).unwrap().location, Location::House);
        assert_eq!(tree.find_device(2).unwrap().location, Location::Room { room_id: 10 });
        assert_eq!(
            tree.find_device(3).unwrap().location,
            Location::SubRoom { room_id: 10, sub_room_id: 100 }
        );
        assert_eq!(tree.find_device(3).unwrap().records.len(), 1);
        assert!(tree.find_device(4).is_none());
    }
}

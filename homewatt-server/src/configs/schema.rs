use crate::models::{
    ConsumptionRecordTable, DeviceTable, HouseConsumptionTable, HouseTable, RoomTable,
    ScheduleTable, SubRoomTable, Table,
};

pub struct SchemaManager {
    tables: Vec<Box<dyn Table>>,
}

impl SchemaManager {
    pub fn new(mut tables: Vec<Box<dyn Table>>) -> Self {
        Self::sort_tables(&mut tables);
        Self { tables }
    }

    fn sort_tables(tables: &mut Vec<Box<dyn Table>>) {
        let mut to_sort = std::mem::take(tables);
        let mut deps_list: Vec<_> = to_sort.iter().map(|t| t.dependencies()).collect();
        let mut sorted = Vec::with_capacity(to_sort.len());

        while !to_sort.is_empty() {
            let independent_indices: Vec<usize> = deps_list.iter().enumerate()
                .filter(|(_, deps)| deps.is_empty())
                .map(|(i, _)| i)
                .collect();

            assert!(!independent_indices.is_empty(), "Circular dependency detected or unresolved dependencies exist.");

            for &index in independent_indices.iter().rev() {
                let table = to_sort.swap_remove(index);
                let _ = deps_list.swap_remove(index);
                sorted.push(table);
            }

            for deps in deps_list.iter_mut() {
                deps.retain(|dep_name| {
                    !sorted.iter().any(|resolved_table| resolved_table.name() == *dep_name)
                });
            }
        }

        *tables = sorted;
    }

    pub fn create_schema(&self) -> Vec<String> {
        self.tables.iter().map(|table| table.create()).collect()
    }

    pub fn dispose_schema(&self) -> Vec<String> {
        self.tables.iter().rev().map(|table| table.dispose()).collect()
    }
}

impl Default for SchemaManager {
    fn default() -> Self {
        SchemaManager::new(vec![
            Box::new(HouseTable),
            Box::new(RoomTable),
            Box::new(SubRoomTable),
            Box::new(DeviceTable),
            Box::new(ConsumptionRecordTable),
            Box::new(HouseConsumptionTable),
            Box::new(ScheduleTable),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockTable {
        name: &'static str,
        dependencies: Vec<&'static str>,
    }

    impl Table for MockTable {
        fn name(&self) -> &'static str {
            self.name
        }

        fn create(&self) -> String {
            format!("CREATE TABLE {};", self.name)
        }

        fn dispose(&self) -> String {
            format!("DROP TABLE {};", self.name)
        }

        fn dependencies(&self) -> Vec<&'static str> {
            self.dependencies.clone()
        }
    }

    fn mock(name: &'static str, dependencies: Vec<&'static str>) -> Box<dyn Table> {
        Box::new(MockTable { name, dependencies })
    }

    #[test]
    fn test_correct_creation_order() {
        let tables = vec![
            mock("consumption_records", vec!["devices"]),
            mock("devices", vec!["houses", "rooms"]),
            mock("rooms", vec!["houses"]),
            mock("houses", vec![]),
        ];

        let manager = SchemaManager::new(tables);
        let statements = manager.create_schema();

        assert_eq!(statements[0], "CREATE TABLE houses;");
        assert_eq!(statements[1], "CREATE TABLE rooms;");
        assert_eq!(statements[2], "CREATE TABLE devices;");
        assert_eq!(statements[3], "CREATE TABLE consumption_records;");
    }

    #[test]
    fn test_dispose_runs_dependents_first() {
        let manager = SchemaManager::new(vec![
            mock("houses", vec![]),
            mock("rooms", vec!["houses"]),
        ]);

        assert_eq!(
            manager.dispose_schema(),
            vec!["DROP TABLE rooms;".to_string(), "DROP TABLE houses;".to_string()]
        );
    }

    #[test]
    fn test_default_schema_creates_parents_first() {
        let statements = SchemaManager::default().create_schema();
        let position = |table: &str| {
            statements
                .iter()
                .position(|statement| statement.contains(&format!("EXISTS {table} (")))
                .unwrap()
        };

        assert!(position("houses") < position("rooms"));
        assert!(position("rooms") < position("sub_rooms"));
        assert!(position("sub_rooms") < position("devices"));
        assert!(position("devices") < position("consumption_records"));
        assert!(position("devices") < position("schedules"));
    }
}

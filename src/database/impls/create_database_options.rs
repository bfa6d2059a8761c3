use crate::database::structs::create_database_options::CreateDatabaseOptions;

impl Default for CreateDatabaseOptions {
    fn default() -> CreateDatabaseOptions {
        CreateDatabaseOptions {
            encoding: String::from("utf8"),
            template: None,
        }
    }
}

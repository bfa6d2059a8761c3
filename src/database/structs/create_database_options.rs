/// Options applied when creating a database.
///
/// `encoding` maps to `ENCODING` on PostgreSQL and `CHARACTER SET` on
/// MySQL; `template` is PostgreSQL-only and skipped when absent.
#[derive(Debug, Clone)]
pub struct CreateDatabaseOptions {
    pub encoding: String,
    pub template: Option<String>,
}

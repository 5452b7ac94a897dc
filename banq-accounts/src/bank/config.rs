use derive_builder::Builder;

#[derive(Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct BankConfig {
    #[builder(setter(into, strip_option), default)]
    pub(super) db_url: Option<String>,
    #[builder(setter(into, strip_option), default)]
    pub(super) max_connections: Option<u32>,
    #[builder(default)]
    pub(super) exec_migrations: bool,
    #[builder(setter(into, strip_option), default)]
    pub(super) pool: Option<sqlx::SqlitePool>,
}

impl BankConfig {
    pub fn builder() -> BankConfigBuilder {
        BankConfigBuilder::default()
    }
}

impl BankConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match (self.db_url.as_ref(), self.pool.as_ref()) {
            (None, None) | (Some(None), None) | (None, Some(None)) => {
                return Err("One of db_url or pool must be set".to_string())
            }
            (Some(_), Some(_)) => return Err("Only one of db_url or pool must be set".to_string()),
            _ => (),
        }
        Ok(())
    }
}

//! Company entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the companies table.
#[derive(Debug, Clone, FromRow)]
pub struct CompanyEntity {
    pub id: i64,
    pub name: String,
    pub domain: String,
}

impl From<CompanyEntity> for domain::models::Company {
    fn from(entity: CompanyEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            domain: entity.domain,
        }
    }
}

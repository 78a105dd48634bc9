use uuid::Uuid;

/// Identifiers are minted here for every insert path, single or bulk.
pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/*
 * Responsibility
 * - Parts Store の契約 (PartRepo) と実装 (Postgres / in-memory) の公開
 */
pub mod error;
pub mod memory_part_repo;
pub mod part_repo;
pub mod pg_part_repo;

pub use memory_part_repo::InMemoryPartRepo;
pub use part_repo::{NewPart, Part, PartRepo};
pub use pg_part_repo::PgPartRepo;

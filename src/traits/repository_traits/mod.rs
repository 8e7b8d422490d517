pub mod cost_explorer_repository;
pub mod object_storage_repository;

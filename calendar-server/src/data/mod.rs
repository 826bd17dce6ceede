pub mod content_repository;

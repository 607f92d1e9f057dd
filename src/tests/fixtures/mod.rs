// Shared builders and canonical values for unit tests. Compiled only under cfg(test).

pub mod commands;
pub mod events;
pub mod rows;
pub mod tasks;

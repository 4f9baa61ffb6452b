pub mod in_memory;
pub mod policy_file;

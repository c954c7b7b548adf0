// Test modules for pet-friends crate
//
// Each source file has a corresponding test file that focuses on business
// logic verification. HTTP behaviour against a stub server lives in the
// integration tests under tests/.

// Test helper utilities
pub mod helpers;

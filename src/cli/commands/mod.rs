pub mod entries;
pub mod system;

use crate::cli::registry::CommandRegistry;

pub fn register_all(registry: &mut CommandRegistry) {
    for entry in entries::definitions() {
        registry.register(entry);
    }
    for entry in system::definitions() {
        registry.register(entry);
    }
}

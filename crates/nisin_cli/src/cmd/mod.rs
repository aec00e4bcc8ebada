/// Buffer decode command.
pub mod decode;
/// Declaration and layout command.
pub mod layout;
/// Schema listing command.
pub mod list;
/// Shared command helpers.
pub mod util;

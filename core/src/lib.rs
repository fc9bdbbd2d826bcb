pub mod cut;
pub mod geometry;
pub mod layout;
pub mod snap;

pub fn version() -> &'static str {
    "0.1.0"
}

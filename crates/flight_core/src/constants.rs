/// Edge weight type, used for both cost and time
pub type Weight = i64;
/// Weight of a single leg. Path sums are accumulated in the wider [`Weight`]
/// so they cannot overflow.
pub use flight_reader::LegWeight;
/// Number of ranked routes reported per request
pub const MAX_PLANS: usize = 3;

mod execute;
mod generate_random_number;

pub use execute::Execute;
pub use generate_random_number::GenerateRandomNumber;

/// Loads a `.env` file from the working directory or its parents when one
/// exists. Variables already set in the environment win.
pub fn init() {
    _ = dotenv::dotenv();
}

/*!
# Moodmate

Moodmate is a small mood journal for the command line. Log how you feel each
day, with an optional note and the current weather, then review the history
as a summary, a streak, weekly and monthly trends, or a CSV export.

## Architecture

- `insights`: the aggregation engine (date keys, most frequent mood, streaks,
  trailing windows). Pure functions over entry slices.
- `export`: CSV rendering of the collection
- `mood`: the entry model
- `store`: loading and saving the collection
- `weather`: best-effort weather lookups
- `ops`: the operations behind each command
- `cli`, `config`, `errors`, `constants`: the application shell

## Usage Example

```rust,no_run
use moodmate::insights::{summarize, DateKey};
use moodmate::store::{EntryStore, JsonFileStore};
use moodmate::Config;

fn main() -> moodmate::AppResult<()> {
    let config = Config::load()?;
    let store = JsonFileStore::new(&config.data_dir);

    let entries = store.load_all()?;
    let summary = summarize(&entries, DateKey::today());
    println!("Current streak: {}", summary.streak);
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// CSV export
pub mod export;
/// Mood aggregation engine
pub mod insights;
/// Entry model
pub mod mood;
/// Command operations
pub mod ops;
/// Entry persistence
pub mod store;
/// Weather provider client
pub mod weather;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use mood::{Mood, MoodEntry};

// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! memcards-core: Core library for the memcards quiz trainer.
//!
//! This library is free of I/O and provides:
//! - Levenshtein-based answer similarity
//! - Answer files with section headers, and lookup of the nearest header
//! - 52-card decks with cyclic preview windows
//! - A seedable PRNG for reproducible shuffles

pub mod answers;
pub mod cards;
pub mod error;
pub mod rng;
pub mod text;

// Re-exports for convenience
pub use answers::{AnswerDeck, find_nearest_header};
pub use cards::{CardDeck, NUM_CARDS};
pub use error::{ErrorReport, Fallible, fail};
pub use rng::{TinyRng, permutation};
pub use text::{is_accepted, normalize, similarity};

//! Protease cleavage-site likelihood prediction.
//!
//! Builds a positional residue frequency [`Profile`] from a protease's known
//! substrate cleavage windows, then slides it over a query sequence to score
//! every possible cut position:
//!
//! - **Corpus** — [`CorpusProvider`] implementations over substrate tables
//! - **Profiles** — [`Profile`] construction and the cached [`ProfileStore`]
//! - **Scanning** — [`scan`] extracts per-position frequencies per window
//! - **Scoring** — [`ScoreWeights`] reduces a window to one likelihood score
//! - **Ranking** — [`rank`] orders sites and applies offset filtering
//! - **Pipeline** — [`CleavagePredictor`] ties the stages together
//!
//! # Example
//!
//! ```
//! use scissile_predict::{CleavagePredictor, MemoryCache, MemoryCorpus, ProfileStore};
//! use scissile_seq::CleavageWindow;
//!
//! let mut corpus = MemoryCorpus::new();
//! corpus.insert(
//!     "granzyme B",
//!     vec![CleavageWindow::new(*b"IEPDSGVE").unwrap()],
//! );
//! let store = ProfileStore::open(Box::new(corpus), Box::new(MemoryCache)).unwrap();
//! let predictor = CleavagePredictor::new(store);
//!
//! // The known substrate context ranks first.
//! let sites = predictor.predict("granzyme B", b"MKIEPDSGVEAA", None).unwrap();
//! assert_eq!(sites[0].window, "IEPDSGVE");
//! assert_eq!(sites[0].offset, 5);
//! ```

pub mod corpus;
pub mod predictor;
pub mod profile;
pub mod rank;
pub mod scan;
pub mod score;
pub mod store;

pub use corpus::{CorpusProvider, MemoryCorpus, TsvCorpus};
pub use predictor::{format_report, CleavagePredictor};
pub use profile::Profile;
pub use rank::{rank, ScoredSite};
pub use scan::{scan, WindowValues, PAD_LEN};
pub use score::{ScoreWeights, DEFAULT_WEIGHTS};
pub use store::{JsonFileCache, MemoryCache, ProfileCache, ProfileStore};

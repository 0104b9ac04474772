//! # 🔁 rotor-core — Rotação Cíclica de Sequências
//!
//! Rotaciona sequências finitas: os primeiros `k` elementos movem-se para o
//! fim (os últimos `n - k` vêm para a frente), preservando a ordem relativa
//! dentro de cada bloco. A sequência do chamador nunca é mutada.
//!
//! > *"Transformação é pura — mesma entrada, mesma saída."*
//!
//! ## Computational Complexity
//!
//! **Rotation — O(n):**
//! - Reversal composition: one full reversal plus two segment reversals
//! - [`rotate`]: O(n) extra space (owned result, input untouched)
//! - [`rotate_in_place`]: O(1) extra space on a caller-owned buffer
//!
//! **Validation — O(1):**
//! - Offset check `k < n` before any element moves
//! - No partial results: the buffer is either fully rotated or untouched
//!
//! ## Precondição
//!
//! `0 <= k < n`, com uma exceção documentada: `n == 0, k == 0` é válido e
//! produz resultado vazio. `k == n` é rejeitado com
//! [`RotateError::InvalidOffset`] — rotação pelo comprimento inteiro não é
//! tratada como no-op.
//!
//! ## Exemplo
//!
//! ```
//! use rotor_core::rotate;
//!
//! let rotated = rotate(&[1, 2, 3, 4, 5, 6, 7, 8, 9], 2)?;
//! assert_eq!(rotated, vec![3, 4, 5, 6, 7, 8, 9, 1, 2]);
//! # Ok::<(), rotor_core::RotateError>(())
//! ```

pub mod error;
pub mod rotate;

pub use error::{RotateError, RotateResult};
pub use rotate::{Rotate, rotate, rotate_in_place};

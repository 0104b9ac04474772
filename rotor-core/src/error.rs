//! Tipos de erro para rotor-core

use thiserror::Error;

/// Resultado customizado para operações de rotação
pub type RotateResult<T> = Result<T, RotateError>;

/// Erros que podem ocorrer em operações de rotação
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotateError {
    /// Offset fora do intervalo válido `[0, n)`
    #[error("Offset inválido: {offset} fora do intervalo [0, {len})")]
    InvalidOffset { offset: usize, len: usize },
}

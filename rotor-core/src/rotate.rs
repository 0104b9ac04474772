//! Rotação por composição de reversões
//!
//! Reverte a sequência inteira e depois reverte os dois segmentos resultantes
//! independentemente — os primeiros `k` elementos terminam no fim sem
//! aritmética de índices além das três passagens de reversão.

use crate::error::{RotateError, RotateResult};

/// Valida o offset contra o comprimento da sequência
///
/// Invariante: `0 <= k < n`. Exceção documentada: `n == 0, k == 0` é válido
/// (resultado vazio). `k == n` é rejeitado — a desigualdade estrita é
/// preservada, não relaxada para no-op.
fn check_offset(offset: usize, len: usize) -> RotateResult<()> {
    if offset == 0 && len == 0 {
        return Ok(());
    }
    if offset >= len {
        return Err(RotateError::InvalidOffset { offset, len });
    }
    Ok(())
}

/// Rotaciona `seq` no próprio buffer: os primeiros `k` elementos movem-se
/// para o fim (equivalentemente, os últimos `n - k` para a frente)
///
/// O(n) tempo, O(1) espaço extra. Ou o buffer é rotacionado por completo,
/// ou permanece intocado (validação precede qualquer movimento).
///
/// # Erros
///
/// [`RotateError::InvalidOffset`] se `k >= seq.len()` (exceto o caso vazio
/// `k == 0, n == 0`).
///
/// # Exemplo
///
/// ```
/// use rotor_core::rotate_in_place;
///
/// let mut buf = [1, 2, 3, 4, 5];
/// rotate_in_place(&mut buf, 2)?;
/// assert_eq!(buf, [3, 4, 5, 1, 2]);
/// # Ok::<(), rotor_core::RotateError>(())
/// ```
pub fn rotate_in_place<T>(seq: &mut [T], k: usize) -> RotateResult<()> {
    check_offset(k, seq.len())?;
    let n = seq.len();

    seq.reverse();
    seq[..n - k].reverse();
    seq[n - k..].reverse();

    Ok(())
}

/// Rotaciona `seq`, retornando uma nova sequência: os últimos `n - k`
/// elementos na frente, seguidos dos primeiros `k`, ordem relativa preservada
///
/// A sequência do chamador nunca é mutada — a rotação opera sobre uma cópia
/// própria. Determinística, sem I/O, sem estado compartilhado.
///
/// # Erros
///
/// [`RotateError::InvalidOffset`] se `k >= seq.len()` (exceto o caso vazio
/// `k == 0, n == 0`).
///
/// # Exemplo
///
/// ```
/// use rotor_core::rotate;
///
/// assert_eq!(rotate(&[1, 2, 3, 4, 5, 6, 7, 8, 9], 6)?, vec![7, 8, 9, 1, 2, 3, 4, 5, 6]);
/// assert_eq!(rotate::<i32>(&[], 0)?, vec![]);
/// # Ok::<(), rotor_core::RotateError>(())
/// ```
pub fn rotate<T: Clone>(seq: &[T], k: usize) -> RotateResult<Vec<T>> {
    let mut rotated = seq.to_vec();
    rotate_in_place(&mut rotated, k)?;
    Ok(rotated)
}

/// Extensão para rotação direta sobre slices
///
/// # Exemplo
///
/// ```
/// use rotor_core::Rotate;
///
/// let rotated = [1, 2, 3].rotated(1)?;
/// assert_eq!(rotated, vec![2, 3, 1]);
/// # Ok::<(), rotor_core::RotateError>(())
/// ```
pub trait Rotate<T> {
    /// Nova sequência com os primeiros `k` elementos movidos para o fim
    fn rotated(&self, k: usize) -> RotateResult<Vec<T>>;
}

impl<T: Clone> Rotate<T> for [T] {
    fn rotated(&self, k: usize) -> RotateResult<Vec<T>> {
        rotate(self, k)
    }
}

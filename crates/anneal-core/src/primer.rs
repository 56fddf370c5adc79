use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enzyme::Enzyme;
use crate::tm::{melting_temp, DEFAULT_CONCENTRATION_NM};

/// Common 5' clamp prepended to every cloning primer.
pub const COMMON_PREFIX: &str = "TGCATC";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("Primer sequence is empty")]
    EmptyPrimer,
    #[error("Unknown enzyme: {0}")]
    UnknownEnzyme(String),
}

/// A request to build one cloning primer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimerRequest {
    /// Raw primer body as entered; trimmed and uppercased before assembly.
    pub sequence: String,
    /// Enzyme name, resolved against [`Enzyme`] at assembly time.
    pub enzyme: String,
    /// Primer concentration in nM. `None`, non-finite, or non-positive
    /// values fall back to [`DEFAULT_CONCENTRATION_NM`].
    #[serde(default)]
    pub concentration_nm: Option<f64>,
}

impl PrimerRequest {
    pub fn new(sequence: impl Into<String>, enzyme: impl Into<String>) -> Self {
        Self {
            sequence: sequence.into(),
            enzyme: enzyme.into(),
            concentration_nm: None,
        }
    }

    fn effective_concentration(&self) -> f64 {
        match self.concentration_nm {
            Some(c) if c.is_finite() && c > 0.0 => c,
            _ => DEFAULT_CONCENTRATION_NM,
        }
    }
}

/// A fully assembled cloning primer with its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssembledPrimer {
    pub sequence: String,
    pub length_bp: usize,
    pub melting_temp_c: f64,
}

/// Forward and reverse cloning primers built as one operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimerPair {
    pub forward: AssembledPrimer,
    pub reverse: AssembledPrimer,
}

/// Assemble a single cloning primer: the common prefix, the enzyme linker,
/// then the normalized primer body.
pub fn assemble(request: &PrimerRequest) -> Result<AssembledPrimer, AssemblyError> {
    build(request, true)
}

/// Assemble a forward/reverse primer pair.
///
/// The leading-ATG adjustment for NdeI only ever applies to the forward
/// primer; the reverse body is taken verbatim.
pub fn assemble_pair(
    forward: &PrimerRequest,
    reverse: &PrimerRequest,
) -> Result<PrimerPair, AssemblyError> {
    Ok(PrimerPair {
        forward: build(forward, true)?,
        reverse: build(reverse, false)?,
    })
}

fn build(
    request: &PrimerRequest,
    adjust_start_codon: bool,
) -> Result<AssembledPrimer, AssemblyError> {
    let enzyme = Enzyme::from_name(&request.enzyme)
        .ok_or_else(|| AssemblyError::UnknownEnzyme(request.enzyme.clone()))?;

    let mut body = request.sequence.trim().to_uppercase();
    if body.is_empty() {
        return Err(AssemblyError::EmptyPrimer);
    }

    // CATAT plus the G left over from a stripped leading ATG reconstitutes
    // the full CATATG site: exactly two bases are removed, not the codon.
    if adjust_start_codon && enzyme == Enzyme::NdeI && body.starts_with("ATG") {
        body.replace_range(..2, "");
    }

    let sequence = format!("{}{}{}", COMMON_PREFIX, enzyme.linker(), body);
    let length_bp = sequence.len();
    let melting_temp_c = melting_temp(&sequence, request.effective_concentration());

    Ok(AssembledPrimer {
        sequence,
        length_bp,
        melting_temp_c,
    })
}

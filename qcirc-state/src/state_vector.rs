//! State vector representation with aligned memory for SIMD operations
//!
//! Basis states are indexed with qubit 0 as the most-significant bit, so the
//! amplitude at index `0b10` of a 2-qubit register is |10⟩: qubit 0 set,
//! qubit 1 clear.

use crate::error::{Result, StateError};
use crate::simd;
use num_complex::Complex64;
use qcirc_core::QubitId;
use qcirc_gates::matrix_ops::is_unitary;
use std::alloc::{alloc_zeroed, dealloc, Layout};
use std::ptr::NonNull;

/// Alignment requirement for SIMD operations (64 bytes for AVX-512)
const SIMD_ALIGNMENT: usize = 64;

/// Hard ceiling on register size, whatever the caller configures
///
/// 2^30 amplitudes are 16 GiB.
pub const MAX_QUBITS: usize = 30;

/// Quantum state vector with SIMD-aligned memory
///
/// # Example
///
/// ```
/// use qcirc_state::StateVector;
///
/// // Create a 2-qubit state (4 amplitudes)
/// let state = StateVector::new(2).unwrap();
/// assert_eq!(state.num_qubits(), 2);
/// assert_eq!(state.dimension(), 4);
/// ```
pub struct StateVector {
    /// Number of qubits
    num_qubits: usize,

    /// State dimension (2^num_qubits)
    dimension: usize,

    /// Pointer to aligned state data
    data: NonNull<Complex64>,

    /// Memory layout for deallocation
    layout: Layout,
}

impl StateVector {
    /// Create a new state vector initialized to |0...0⟩
    ///
    /// # Errors
    /// - [`StateError::CapacityExceeded`] if `num_qubits > MAX_QUBITS`; nothing
    ///   is allocated in that case
    /// - [`StateError::AllocationError`] if the allocator refuses
    ///
    /// # Example
    /// ```
    /// use qcirc_state::StateVector;
    ///
    /// let state = StateVector::new(3).unwrap();
    /// assert_eq!(state.amplitudes()[0].re, 1.0);
    /// ```
    pub fn new(num_qubits: usize) -> Result<Self> {
        Self::with_max_qubits(num_qubits, MAX_QUBITS)
    }

    /// Create a new |0...0⟩ state against a caller-supplied ceiling
    ///
    /// The effective ceiling is `min(max_qubits, MAX_QUBITS)`.
    pub fn with_max_qubits(num_qubits: usize, max_qubits: usize) -> Result<Self> {
        let max = max_qubits.min(MAX_QUBITS);
        if num_qubits > max {
            return Err(StateError::CapacityExceeded {
                requested: num_qubits,
                max,
            });
        }

        let dimension = 1usize << num_qubits;
        let size = Self::memory_bytes(num_qubits);

        let layout = Layout::from_size_align(size, SIMD_ALIGNMENT)
            .map_err(|_| StateError::AllocationError { size })?;

        // SAFETY: layout has non-zero size (dimension >= 1) and valid alignment.
        // Zeroed memory is a valid Complex64 (0.0 + 0.0i).
        let data = unsafe {
            let ptr = alloc_zeroed(layout) as *mut Complex64;
            let mut data = NonNull::new(ptr).ok_or(StateError::AllocationError { size })?;
            *data.as_mut() = Complex64::new(1.0, 0.0);
            data
        };

        Ok(Self {
            num_qubits,
            dimension,
            data,
            layout,
        })
    }

    /// Create a state vector from raw amplitude data
    ///
    /// The amplitudes are copied as-is; normalization is the caller's concern.
    ///
    /// # Errors
    /// Returns error if the length is not 2^num_qubits or allocation fails
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Complex64]) -> Result<Self> {
        let mut state = Self::new(num_qubits)?;

        if amplitudes.len() != state.dimension {
            return Err(StateError::DimensionMismatch {
                expected: state.dimension,
                actual: amplitudes.len(),
            });
        }

        state.amplitudes_mut().copy_from_slice(amplitudes);
        Ok(state)
    }

    /// Bytes needed for an `num_qubits`-qubit register
    ///
    /// Saturates at `usize::MAX` when the register cannot be addressed.
    #[inline]
    pub const fn memory_bytes(num_qubits: usize) -> usize {
        if num_qubits >= usize::BITS as usize {
            return usize::MAX;
        }
        (1usize << num_qubits).saturating_mul(std::mem::size_of::<Complex64>())
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the state dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Get a reference to the state amplitudes
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        // SAFETY: data points to `dimension` initialized amplitudes owned by self
        unsafe { std::slice::from_raw_parts(self.data.as_ptr(), self.dimension) }
    }

    /// Get a mutable reference to the state amplitudes
    #[inline]
    pub fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        // SAFETY: as above, and &mut self guarantees exclusive access
        unsafe { std::slice::from_raw_parts_mut(self.data.as_ptr(), self.dimension) }
    }

    /// Check if the pointer is properly aligned for SIMD
    #[inline]
    pub fn is_simd_aligned(&self) -> bool {
        (self.data.as_ptr() as usize) % SIMD_ALIGNMENT == 0
    }

    /// Bit of the basis index that stores `qubit`
    ///
    /// # Errors
    /// Returns error if `qubit >= num_qubits`
    pub fn bit_position(&self, qubit: usize) -> Result<usize> {
        self.check_qubit(qubit)?;
        Ok(QubitId::new(qubit).bit_position(self.num_qubits))
    }

    fn check_qubit(&self, qubit: usize) -> Result<()> {
        if qubit >= self.num_qubits {
            return Err(StateError::InvalidQubitIndex {
                index: qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    /// Apply a single-qubit gate to `qubit`
    ///
    /// Every pair of amplitudes whose indices differ only in the qubit's bit
    /// is replaced by the matrix-vector product, so exactly 2^(n-1) pairs
    /// are visited.
    ///
    /// # Errors
    /// Returns error if the qubit index is invalid; the state is untouched.
    ///
    /// # Example
    /// ```
    /// use qcirc_state::StateVector;
    /// use qcirc_gates::matrices::PAULI_X;
    ///
    /// let mut state = StateVector::new(2).unwrap();
    /// state.apply_single_qubit_gate(&PAULI_X, 0).unwrap();
    /// // X on qubit 0 gives |10⟩
    /// assert_eq!(state.amplitudes()[0b10].re, 1.0);
    /// ```
    pub fn apply_single_qubit_gate(
        &mut self,
        matrix: &[[Complex64; 2]; 2],
        qubit: usize,
    ) -> Result<()> {
        let bit = self.bit_position(qubit)?;
        debug_assert!(is_unitary(matrix, 1e-9), "gate matrix is not unitary");
        simd::apply_single_qubit_gate(self.amplitudes_mut(), matrix, 1 << bit);
        Ok(())
    }

    /// Probability of one basis state
    ///
    /// # Errors
    /// Returns error if `basis_state >= dimension`
    pub fn probability(&self, basis_state: usize) -> Result<f64> {
        self.amplitudes()
            .get(basis_state)
            .map(|a| a.norm_sqr())
            .ok_or(StateError::DimensionMismatch {
                expected: self.dimension,
                actual: basis_state,
            })
    }

    /// |amplitude|² for every basis state, in index order
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes().iter().map(|a| a.norm_sqr()).collect()
    }

    /// Compute the norm of the state vector
    pub fn norm(&self) -> f64 {
        simd::norm_simd(self.amplitudes())
    }

    /// Check if the state is normalized, |norm - 1| < epsilon
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() < epsilon
    }

    /// Reset the state to |0...0⟩
    pub fn reset(&mut self) {
        let amplitudes = self.amplitudes_mut();
        amplitudes.fill(Complex64::new(0.0, 0.0));
        amplitudes[0] = Complex64::new(1.0, 0.0);
    }

    /// Clone the state vector
    pub fn clone_state(&self) -> Result<Self> {
        Self::from_amplitudes(self.num_qubits, self.amplitudes())
    }
}

impl Drop for StateVector {
    fn drop(&mut self) {
        // SAFETY: data was allocated in `with_max_qubits` with this layout
        unsafe {
            dealloc(self.data.as_ptr() as *mut u8, self.layout);
        }
    }
}

impl std::fmt::Debug for StateVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateVector")
            .field("num_qubits", &self.num_qubits)
            .field("dimension", &self.dimension)
            .field("norm", &self.norm())
            .finish()
    }
}

// Safety: StateVector owns its data and ensures exclusive access
unsafe impl Send for StateVector {}
unsafe impl Sync for StateVector {}

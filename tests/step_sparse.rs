//! Tests for the Arnoldi step over sparse (CSR) operators.
//!
//! The step is generic over the matrix-vector capability, so a CSR operator
//! must produce exactly the same iteration as its densified counterpart.

use approx::assert_abs_diff_eq;
use arnoldi::core::traits::Indexing;
use arnoldi::{CsrMatrix, KrylovBasis, arnoldi_step};
use faer::Mat;

/// A fixed 5×5 nonsymmetric sparse pattern and its dense equivalent.
fn sparse_and_dense() -> (CsrMatrix<f64>, Mat<f64>) {
    // [[4,0,1,0,0],
    //  [0,3,0,0,2],
    //  [0.5,0,2,1,0],
    //  [0,0,1,5,0],
    //  [0,2,0,0,1]]
    let row_ptr = vec![0, 2, 4, 7, 9, 11];
    let col_idx = vec![0, 2, 1, 4, 0, 2, 3, 2, 3, 1, 4];
    let values = vec![4.0, 1.0, 3.0, 2.0, 0.5, 2.0, 1.0, 1.0, 5.0, 2.0, 1.0];
    let csr = CsrMatrix::from_csr(5, 5, row_ptr.clone(), col_idx.clone(), values.clone());
    let mut dense = Mat::<f64>::from_fn(5, 5, |_, _| 0.0);
    for i in 0..5 {
        for p in row_ptr[i]..row_ptr[i + 1] {
            dense[(i, col_idx[p])] = values[p];
        }
    }
    (csr, dense)
}

/// Driving the iteration with the CSR operator matches the dense operator
/// step for step: same Hessenberg columns, same basis vectors.
#[test]
fn csr_matches_dense_iteration() {
    let (csr, dense) = sparse_and_dense();
    assert_eq!(csr.nrows(), 5);
    assert_eq!(csr.ncols(), 5);
    assert_eq!(csr.nnz(), 11);
    let seed = vec![1.0, 1.0, 1.0, 1.0, 1.0];
    let mut basis_s = KrylovBasis::from_seed(seed.clone()).unwrap();
    let mut basis_d = KrylovBasis::from_seed(seed).unwrap();

    for k in 0..4 {
        let rs = arnoldi_step(&csr, &basis_s, k, None).unwrap();
        let rd = arnoldi_step(&dense, &basis_d, k, None).unwrap();
        for (hs, hd) in rs.column.iter().zip(rd.column.iter()) {
            assert_abs_diff_eq!(hs, hd, epsilon = 1e-13);
        }
        let (vs, vd) = (rs.next.expect("no breakdown"), rd.next.expect("no breakdown"));
        for (a, b) in vs.iter().zip(vd.iter()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-13);
        }
        basis_s.push(vs);
        basis_d.push(vd);
    }
}

/// Breakdown is signaled identically for sparse operators.
#[test]
fn csr_identity_breaks_down() {
    let eye = CsrMatrix::from_csr(3, 3, vec![0, 1, 2, 3], vec![0, 1, 2], vec![1.0; 3]);
    let basis = KrylovBasis::from_seed(vec![0.0, 1.0, 0.0]).unwrap();
    let res = arnoldi_step(&eye, &basis, 0, None).unwrap();
    assert_eq!(res.column, vec![1.0, 0.0]);
    assert!(res.is_breakdown());
}

#![allow(non_snake_case)]

use coneprep::{algebra::*, transform::*};

// minimize x0 + x1
// subject to x0 + x1 = 1, x ≥ 0 and ‖x‖ ≤ 1
fn socp_data() -> ProblemData<f64> {
    ProblemData::new(
        Matrix::from(&[[1., 1.]]),
        vec![1.],
        vec![1., 1.],
        Matrix::from(&[
            [-1., 0.], //
            [0., -1.], //
            [0., 0.],  //
            [-1., 0.], //
            [0., -1.], //
        ]),
        vec![0., 0., 1., 0., 0.],
        ConeDims::new(2, &[3], &[]),
    )
}

#[test]
fn test_socp_simplified() {
    let problem = make_sedumi_format_problem(&socp_data(), true).unwrap();

    // the free variables are folded into the nonnegative slacks
    assert_eq!(problem.cones.f(), 0);
    assert_eq!(problem.cones.l(), 2);
    assert_eq!(problem.cones.q(), vec![3]);
    assert_eq!((problem.m(), problem.n()), (4, 5));
    assert_eq!(problem.offset, 0.);

    let A = Matrix::from(&problem.A);
    let Atest = Matrix::from(&[
        [1., 1., 0., 0., 0.],  //
        [0., 0., 1., 0., 0.],  //
        [-1., 0., 0., 1., 0.], //
        [0., -1., 0., 0., 1.], //
    ]);
    assert_eq!(A, Atest);
    assert_eq!(Matrix::from(&problem.b).data, vec![1., 1., 0., 0.]);
    assert_eq!(Matrix::from(&problem.c).data, vec![1., 1., 0., 0., 0.]);
}

#[test]
fn test_socp_unsimplified() {
    let problem = make_sedumi_format_problem(&socp_data(), false).unwrap();

    assert_eq!(problem.cones.f(), 2);
    assert_eq!(problem.cones.l(), 2);
    assert_eq!(problem.cones.q(), vec![3]);
    assert_eq!((problem.m(), problem.n()), (6, 7));
    assert_eq!(problem.offset, 0.);

    let dims = problem.dims();
    assert_eq!((dims.f, dims.l), (2., 2.));
    assert_eq!(dims.q, vec![3.]);
    assert!(dims.s.is_empty());

    // [A 0; G I]
    let A = Matrix::from(&problem.A);
    assert_eq!(A.col_slice(0), &[1., -1., 0., 0., -1., 0.]);
    assert_eq!(A.col_slice(4), &[0., 0., 0., 1., 0., 0.]);
    assert_eq!(Matrix::from(&problem.b).data, vec![1., 0., 0., 1., 0., 0.]);
}

#[test]
fn test_sparse_input_and_row_objective() {
    let dense = socp_data();

    let mut sparse = dense.clone();
    sparse.A = CscMatrix::from(&dense.A.to_dense()).into();
    sparse.G = CscMatrix::from(&dense.G.to_dense()).into();
    sparse.c = Matrix::new((1, 2), vec![1., 1.]).into();

    let P1 = make_sedumi_format_problem(&dense, true).unwrap();
    let P2 = make_sedumi_format_problem(&sparse, true).unwrap();
    assert_eq!(P1, P2);
}

#[test]
fn test_psd_symmetrized_without_simplify() {
    // minimize x0 subject to [x0 1; 0 x0] ⪰ 0
    let data = ProblemData::new(
        Matrix::<f64>::zeros((0, 1)),
        Vec::<f64>::new(),
        vec![1.],
        Matrix::from(&[[-1.], [0.], [0.], [-1.]]),
        vec![0., 1., 0., 0.],
        ConeDims::new(0, &[], &[2]),
    );
    let problem = make_sedumi_format_problem(&data, false).unwrap();

    assert_eq!(problem.cones.s(), vec![2]);
    assert_eq!((problem.m(), problem.n()), (4, 5));

    let A = Matrix::from(&problem.A);
    assert_eq!(A.col_slice(2), &[0., 0.5, 0.5, 0.]);
    assert_eq!(A.col_slice(3), &[0., 0.5, 0.5, 0.]);
    assert_eq!(Matrix::from(&problem.b).data, vec![0., 1., 0., 0.]);
}

#[test]
fn test_block_height_invariance() {
    let data = socp_data();

    let results: Vec<_> = [1, 3, 6, 11]
        .iter()
        .map(|&height| {
            let settings = TransformSettingsBuilder::default()
                .simplify_enable(false)
                .sparsify_block_height(height)
                .build()
                .unwrap();
            let mut transformer = SedumiTransformer::new(settings).unwrap();
            transformer.transform(&data).unwrap()
        })
        .collect();

    for problem in &results[1..] {
        assert_eq!(problem, &results[0]);
        assert!(problem.A.check_format().is_ok());
    }
}

#[test]
fn test_sparsify_tall_matches_dense() {
    let M = Matrix::from(&[
        [1., 0., 2., 0.],  //
        [0., 0., 0., 0.],  //
        [3., 4., 0., 0.],  //
        [0., 5., 0., -6.], //
        [7., 0., 0., 8.],  //
    ]);
    let rows = M.nrows();

    for height in [1, 3, rows, rows + 5] {
        let S = sparsify_tall(&M, height);
        assert!(S.check_format().is_ok());
        assert_eq!(S.nnz(), 8);
        assert_eq!(Matrix::from(&S), M);
    }
}

#[test]
fn test_normalize_errors() {
    let good = socp_data();
    assert!(normalize(&good).is_ok());

    // exponential cones
    let mut data = good.clone();
    data.dims.ep = 1;
    assert!(matches!(
        make_sedumi_format_problem(&data, true),
        Err(TransformError::UnsupportedCone(_))
    ));

    // zero sized second order cone
    let mut data = good.clone();
    data.dims.q = vec![3, 0];
    assert!(matches!(normalize(&data), Err(TransformError::InputShape(_))));

    // b does not match A
    let mut data = good.clone();
    data.b = vec![1., 2.].into();
    assert!(matches!(normalize(&data), Err(TransformError::InputShape(_))));

    // G does not match the cone dimensions
    let mut data = good.clone();
    data.dims.l = 1;
    assert!(matches!(normalize(&data), Err(TransformError::InputShape(_))));

    // A does not match c
    let mut data = good.clone();
    data.A = Matrix::from(&[[1., 1., 1.]]).into();
    assert!(matches!(normalize(&data), Err(TransformError::InputShape(_))));

    // c is not a vector
    let mut data = good;
    data.c = Matrix::from(&[[1., 1.], [1., 1.]]).into();
    assert!(matches!(normalize(&data), Err(TransformError::InputShape(_))));
}

#![allow(non_snake_case)]

#[cfg(feature = "serde")]
#[test]
fn test_json_io() {
    use coneprep::{algebra::*, transform::*};
    use std::io::{Seek, SeekFrom};

    // x0 + 2 x1 = 2 with x1 ≥ 0 and a 2x2 PSD block
    let data = ProblemData::new(
        Matrix::from(&[[1., 2.]]),
        vec![2.],
        vec![1., 1.],
        Matrix::from(&[[0., -1.], [-1., 0.], [0., 0.], [0., 0.], [0., -1.]]),
        vec![0., 0., 1., 1., 0.],
        ConeDims::new(1, &[], &[2]),
    );

    let settings = TransformSettingsBuilder::default()
        .allow_nonzero_b(true)
        .build()
        .unwrap();
    let mut transformer = SedumiTransformer::new(settings).unwrap();
    let problem = transformer.transform(&data).unwrap();

    // write the problem to a file
    let mut file = tempfile::tempfile().unwrap();
    problem.save_to_file(&mut file).unwrap();

    // read the problem from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let problem2 = SedumiProblem::<f64>::load_from_file(&mut file).unwrap();
    assert_eq!(problem, problem2);
    assert_eq!(problem.dims(), problem2.dims());
}

#[cfg(feature = "serde")]
#[test]
fn test_json_bad_dims() {
    use coneprep::transform::*;
    use std::io::{Seek, SeekFrom, Write};

    let json = r#"{
        "A": {"m": 1, "n": 1, "colptr": [0, 1], "rowval": [0], "nzval": [1.0]},
        "b": {"m": 1, "n": 1, "colptr": [0, 1], "rowval": [0], "nzval": [1.0]},
        "c": {"m": 1, "n": 1, "colptr": [0, 1], "rowval": [0], "nzval": [1.0]},
        "K": {"f": 0.5, "l": 0.5, "q": [], "s": []},
        "offset": 0.0
    }"#;

    let mut file = tempfile::tempfile().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let err = SedumiProblem::<f64>::load_from_file(&mut file).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[cfg(feature = "serde")]
#[test]
fn test_json_oversized_dims() {
    use coneprep::transform::*;
    use std::io::{Seek, SeekFrom, Write};

    // a PSD side whose square can't be indexed
    let json = r#"{
        "A": {"m": 1, "n": 1, "colptr": [0, 1], "rowval": [0], "nzval": [1.0]},
        "b": {"m": 1, "n": 1, "colptr": [0, 1], "rowval": [0], "nzval": [1.0]},
        "c": {"m": 1, "n": 1, "colptr": [0, 1], "rowval": [0], "nzval": [1.0]},
        "K": {"f": 0.0, "l": 0.0, "q": [], "s": [8589934592.0]},
        "offset": 0.0
    }"#;

    let mut file = tempfile::tempfile().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let err = SedumiProblem::<f64>::load_from_file(&mut file).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

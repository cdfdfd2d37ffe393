#![allow(non_snake_case)]

use super::*;
use crate::algebra::*;
use crate::cones::{ConeSet, SedumiDims};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

// The output contract as written to file.  Cone dimensions
// are written with float leaves.

#[derive(Serialize, Deserialize)]
#[serde(bound = "T: Serialize + DeserializeOwned")]
struct JsonSedumiProblem<T: FloatT> {
    pub A: CscMatrix<T>,
    pub b: CscMatrix<T>,
    pub c: CscMatrix<T>,
    pub K: SedumiDims<T>,
    pub offset: T,
}

impl<T> SedumiProblem<T>
where
    T: FloatT + DeserializeOwned + Serialize,
{
    /// Write the problem to a file in JSON format
    pub fn save_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let json_data = JsonSedumiProblem {
            A: self.A.clone(),
            b: self.b.clone(),
            c: self.c.clone(),
            K: self.dims(),
            offset: self.offset,
        };

        // write to file
        let json = serde_json::to_string(&json_data)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }

    /// Read a problem from a file in JSON format
    pub fn load_from_file(file: &mut File) -> Result<Self, io::Error> {
        // read file
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let json_data: JsonSedumiProblem<T> = serde_json::from_str(&buffer)?;

        let K = &json_data.K;
        let q = K.q.iter().map(|&d| float_to_dim(d)).collect::<Result<Vec<_>, _>>()?;
        let s = K.s.iter().map(|&d| float_to_dim(d)).collect::<Result<Vec<_>, _>>()?;
        let cones = ConeSet::from_dims(float_to_dim(K.f)?, float_to_dim(K.l)?, &q, &s)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let problem = SedumiProblem {
            A: json_data.A,
            b: json_data.b,
            c: json_data.c,
            cones,
            offset: json_data.offset,
        };
        check_consistency(&problem)?;

        Ok(problem)
    }
}

fn invalid_data(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.to_string())
}

fn float_to_dim<T: FloatT>(v: T) -> Result<usize, io::Error> {
    if v.fract() != T::zero() {
        return Err(invalid_data("cone dimensions must be integral"));
    }
    v.to_usize()
        .ok_or_else(|| invalid_data("cone dimensions must be nonnegative and in range"))
}

fn check_consistency<T: FloatT>(problem: &SedumiProblem<T>) -> Result<(), io::Error> {
    for M in [&problem.A, &problem.b, &problem.c] {
        M.check_format()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    }
    let (m, n) = problem.A.size();
    if problem.b.size() != (m, 1) || problem.c.size() != (1, n) || problem.cones.numel() != n {
        return Err(invalid_data("inconsistent problem dimensions"));
    }
    Ok(())
}

#[test]
fn test_json_io() {
    use std::io::{Seek, SeekFrom};

    let data = ProblemData::new(
        Matrix::from(&[[1., 2.]]),
        vec![0.],
        vec![1., 1.],
        Matrix::from(&[[-1., 0.], [0., 3.], [1., 1.]]),
        vec![1., 0., 0.],
        ConeDims::new(1, &[2], &[]),
    );
    let problem = make_sedumi_format_problem(&data, false).unwrap();

    // write the problem to a file
    let mut file = tempfile::tempfile().unwrap();
    problem.save_to_file(&mut file).unwrap();

    // read the problem from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let problem2 = SedumiProblem::<f64>::load_from_file(&mut file).unwrap();
    assert_eq!(problem, problem2);
}

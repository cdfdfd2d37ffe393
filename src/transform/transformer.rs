use super::*;
use crate::algebra::*;
use crate::io::ConfigurablePrintTarget;
use std::io::Write;

/// Transformer from raw conic model data to SeDuMi format
///
/// __Example usage__ : To express the problem
/// ```text
/// minimize    x0 + x1
/// subject to  x0 - x1 = 0
///             x0 ≥ 1
/// ```
///
/// ```no_run
/// use coneprep::algebra::*;
/// use coneprep::transform::*;
///
/// let data = ProblemData::new(
///     Matrix::from(&[[1., -1.]]),
///     vec![0.],
///     vec![1., 1.],
///     Matrix::from(&[[-1., 0.]]),
///     vec![-1.],
///     ConeDims::new(1, &[], &[]),
/// );
///
/// let settings = TransformSettings::default();
/// let mut transformer = SedumiTransformer::new(settings).unwrap();
/// let problem = transformer.transform(&data).unwrap();
///
/// assert_eq!(problem.offset, 0.);
/// ```
#[derive(Debug)]
pub struct SedumiTransformer<T: FloatT = f64> {
    pub settings: TransformSettings<T>,
    pub info: TransformInfo<T>,
    /// rows and columns of the expanded program kept by the last
    /// simplifying transform
    pub reduce_map: Option<ReductionIndex>,
    /// eliminations performed by the last simplifying transform
    pub eliminated: Vec<EliminatedVariable>,
}

impl<T> SedumiTransformer<T>
where
    T: FloatT,
{
    pub fn new(settings: TransformSettings<T>) -> Result<Self, TransformError> {
        settings.validate()?;
        Ok(Self {
            settings,
            info: TransformInfo::new(),
            reduce_map: None,
            eliminated: Vec::new(),
        })
    }

    /// Run the full pipeline : normalize, expand, simplify (or
    /// only symmetrize when simplification is disabled) and sparsify.
    pub fn transform(&mut self, data: &ProblemData<T>) -> Result<SedumiProblem<T>, TransformError> {
        self.settings.validate()?;
        self.info.reset();
        self.reduce_map = None;
        self.eliminated.clear();

        let data = normalize(data)?;
        self.info.record_input(&data);

        // reporting failures don't affect the result
        let _ = self.info.print_configuration(&self.settings);

        let program = expand(data)?;
        self.info.record_expanded(&program);

        let (program, offset) = if self.settings.simplify_enable {
            let cones = program.cones.clone();
            let simplification = simplify(program, &self.settings)?;
            self.info.record_simplification(&simplification, &cones);

            let Simplification {
                program,
                offset,
                reduce_map,
                eliminated,
            } = simplification;
            self.reduce_map = Some(reduce_map);
            self.eliminated = eliminated;
            (program, offset)
        } else {
            (symmetrize(program), T::zero())
        };

        let problem =
            SedumiProblem::from_program(&program, offset, self.settings.sparsify_block_height);
        self.info.record_output(&problem);

        let _ = self.info.print_summary(&self.settings, &problem.cones);

        Ok(problem)
    }
}

impl<T> ConfigurablePrintTarget for SedumiTransformer<T>
where
    T: FloatT,
{
    fn print_to_stdout(&mut self) {
        self.info.print_to_stdout()
    }
    fn print_to_sink(&mut self) {
        self.info.print_to_sink()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.info.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.info.print_to_stream(stream)
    }
    fn print_to_buffer(&mut self) {
        self.info.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.info.get_print_buffer()
    }
}

/// Express a conic model in SeDuMi format using default settings,
/// with or without simplification.
pub fn make_sedumi_format_problem<T>(
    data: &ProblemData<T>,
    simplify: bool,
) -> Result<SedumiProblem<T>, TransformError>
where
    T: FloatT,
{
    let settings = TransformSettings {
        simplify_enable: simplify,
        ..TransformSettings::default()
    };
    SedumiTransformer::new(settings)?.transform(data)
}

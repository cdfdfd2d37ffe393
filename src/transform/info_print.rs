use super::*;
use crate::algebra::*;
use crate::cones::ConeSet;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use std::io::Write;

macro_rules! expformat {
    ($fmt:expr,$val:expr) => {
        if $val.is_finite() {
            _exp_str_reformat(format!($fmt, $val))
        } else {
            format!($fmt, $val)
        }
    };
}

impl<T> ConfigurablePrintTarget for TransformInfo<T> {
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}

impl<T> TransformInfo<T>
where
    T: FloatT,
{
    pub(crate) fn print_configuration(
        &mut self,
        settings: &TransformSettings<T>,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;

        writeln!(out, "-------------------------------------------------------------")?;
        writeln!(
            out,
            "           coneprep v{}  -  SeDuMi format transform",
            crate::VERSION
        )?;
        writeln!(out, "-------------------------------------------------------------")?;

        writeln!(out, "\ninput:")?;
        writeln!(out, "  variables     = {}", self.nvars_input)?;
        writeln!(out, "  constraints   = {}", self.ncons_input)?;

        writeln!(out, "\nsettings:")?;
        writeln!(
            out,
            "  simplify: {}, nonzero b: {}, pivot tol = {:.1e}",
            _bool_on_off(settings.simplify_enable),
            _bool_on_off(settings.allow_nonzero_b),
            settings.pivot_tolerance
        )?;
        writeln!(
            out,
            "  sparsify block height = {}, precision: {} bit",
            settings.sparsify_block_height,
            _get_precision_string::<T>()
        )?;
        out.flush()?;

        std::io::Result::Ok(())
    }

    pub(crate) fn print_summary(
        &mut self,
        settings: &TransformSettings<T>,
        cones: &ConeSet<T>,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;

        writeln!(out, "\nexpanded:")?;
        writeln!(out, "  variables     = {}", self.nvars_expanded)?;
        writeln!(out, "  constraints   = {}", self.ncons_expanded)?;

        if settings.simplify_enable {
            writeln!(out, "\nsimplify:")?;
            writeln!(
                out,
                "  eliminated    = {} free, {} nonnegative",
                self.eliminated_free, self.eliminated_nonneg
            )?;
            writeln!(
                out,
                "  removed cols  = {} free, {} nonnegative, {} soc",
                self.removed_free, self.removed_nonneg, self.removed_soc
            )?;
            writeln!(out, "  removed rows  = {}", self.removed_rows)?;
        }

        writeln!(out, "\nresult:")?;
        writeln!(out, "  variables     = {}", self.nvars)?;
        writeln!(out, "  constraints   = {}", self.ncons)?;
        writeln!(out, "  nnz(A)        = {}", self.nnz)?;
        writeln!(out, "  offset        = {}", expformat!("{:+8.4e}", self.offset))?;
        writeln!(out, "  cones (total) = {}", cones.len())?;
        _print_conedims(out, "free", &[cones.f()])?;
        _print_conedims(out, "nonnegative", &[cones.l()])?;
        _print_conedims(out, "soc", &cones.q())?;
        _print_conedims(out, "psd", &cones.s())?;
        writeln!(out)?;
        out.flush()?;

        std::io::Result::Ok(())
    }
}

fn _bool_on_off(v: bool) -> &'static str {
    match v {
        true => "on",
        false => "off",
    }
}

fn _get_precision_string<T: FloatT>() -> String {
    (::std::mem::size_of::<T>() * 8).to_string()
}

fn _print_conedims(out: &mut PrintTarget, name: &str, dims: &[usize]) -> std::io::Result<()> {
    let maxlistlen = 5;

    // skip if there are none of this type
    let dims: Vec<usize> = dims.iter().copied().filter(|&d| d > 0).collect();
    let count = dims.len();
    if count == 0 {
        return std::io::Result::Ok(());
    }

    let name = format!("{name:>11}");
    write!(out, "    : {name} = {count}, ")?;

    if count == 1 {
        write!(out, " dim = {}", dims[0])?;
    } else if count <= maxlistlen {
        //print them all
        write!(out, " dim = (")?;
        for dim in dims.iter().take(count - 1) {
            write!(out, "{dim},")?;
        }
        write!(out, "{})", dims[count - 1])?;
    } else {
        // print first (maxlistlen-1) and the final one
        write!(out, " dim = (")?;
        for dim in dims.iter().take(maxlistlen - 1) {
            write!(out, "{dim},")?;
        }
        write!(out, "...,{})", dims[count - 1])?;
    }

    writeln!(out)?;

    std::io::Result::Ok(())
}

// convert a string in LowerExp display format into one that
// 1) always has a sign after the exponent, and
// 2) has at least two digits in the exponent.
pub(crate) fn _exp_str_reformat(mut thestr: String) -> String {
    let eidx = match thestr.find('e') {
        Some(eidx) => eidx,
        None => return thestr,
    };
    let has_sign = thestr[eidx + 1..].starts_with('-');

    let exp_digits = thestr.len() - eidx - 1 - usize::from(has_sign);

    let chars = match (has_sign, exp_digits < 2) {
        (false, true) => "+0",
        (false, false) => "+",
        (true, true) => "-0",
        (true, false) => "-",
    };

    let skip = usize::from(has_sign);
    thestr.replace_range(eidx + 1..eidx + 1 + skip, chars);
    thestr
}

#[test]
fn test_exp_str_reformat() {
    assert_eq!(_exp_str_reformat(format!("{:+8.4e}", 45.)), "+4.5000e+01");
    assert_eq!(_exp_str_reformat(format!("{:+8.4e}", 0.)), "+0.0000e+00");
    assert_eq!(_exp_str_reformat(format!("{:+8.4e}", -1e-3)), "-1.0000e-03");
    assert_eq!(_exp_str_reformat(format!("{:+8.4e}", 1e123)), "+1.0000e+123");
}

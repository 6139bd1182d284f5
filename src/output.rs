use console::Style;

use crate::assembler::{DiagnosticRecord, FolderFailure};
use crate::descriptor::MethodSignature;
use crate::hints::HintKind;
use crate::pointcut::Pointcut;
use crate::render;
use crate::report::Report;

pub fn print_error(msg: &str) {
    let style = Style::new().red().bold();
    eprintln!("{} {}", style.apply_to("✗"), msg);
}

pub fn print_success(msg: &str) {
    let style = Style::new().green().bold();
    println!("{} {}", style.apply_to("✓"), msg);
}

pub fn print_report(report: &Report, failures: &[FolderFailure]) {
    if report.hints.is_empty() && report.uncovered.is_empty() {
        print_success("No survived mutant needs an explanation.");
    }

    if !report.uncovered.is_empty() {
        let style = Style::new().yellow().bold();
        println!(
            "{} {} methods are not reached by any test",
            style.apply_to("!"),
            report.uncovered.len()
        );
        let dim = Style::new().dim();
        for m in &report.uncovered {
            println!("  {} {}", dim.apply_to("·"), m.signature);
        }
        println!();
    }

    for (i, record) in report.hints.iter().enumerate() {
        print_record(i + 1, record);
        println!();
    }

    if !failures.is_empty() {
        let dim = Style::new().dim();
        println!("  {} {} hint folders skipped", dim.apply_to("·"), failures.len());
        for f in failures {
            println!("    {} {}", dim.apply_to(&f.folder), f.error);
        }
    }
}

pub fn print_record(n: usize, record: &DiagnosticRecord) {
    let ref_style = Style::new().cyan().bold();
    let loc_style = Style::new().dim();
    let op_style = Style::new().magenta();
    let m = &record.mutation;

    let line = m.line.map(|l| format!(":{l}")).unwrap_or_default();
    println!(
        "{} {}.{}{} {}",
        ref_style.apply_to(format!("@h{n}")),
        m.full_class_name,
        m.signature,
        line,
        loc_style.apply_to(format!("[{}]", m.mutator)),
    );

    if m.tests.is_empty() {
        println!("  no test executes this mutant");
    } else {
        let names: Vec<_> = m.tests.iter().map(|t| t.display_name()).collect();
        println!("  survives {}", names.join(", "));
    }

    match &record.hint.kind {
        HintKind::Infection { direct_access, .. } => {
            if *direct_access {
                println!("  the mutated method is called directly by tests; check its result");
            } else {
                println!("  the mutation reaches outside the method; check what these calls return:");
            }
        }
        HintKind::Observation { location } => {
            let file = render::location_file(location).unwrap_or("unknown file");
            println!("  a local value diverges in {}", op_style.apply_to(file));
        }
    }
    if let Some(targets) = &record.hint.targets {
        for t in targets {
            println!("    {}", op_style.apply_to(render::trim_package(&t.signature)));
        }
    }

    if let Some(diff) = &record.diff {
        println!(
            "  {}: expected {} but observed {}",
            render::describe_pointcut(&diff.pointcut),
            op_style.apply_to(render::describe(&diff.expected)),
            op_style.apply_to(render::describe(&diff.observed)),
        );
    }
}

pub fn print_signature(name: &str, signature: &MethodSignature) {
    let style = Style::new().cyan().bold();
    println!(
        "{} {}{}",
        style.apply_to(&signature.return_type),
        name,
        signature.param_list()
    );
}

pub fn print_pointcut(pointcut: &Pointcut) {
    let style = Style::new().cyan().bold();
    println!("{} {}", style.apply_to(pointcut.to_string()), render::describe_pointcut(pointcut));
}

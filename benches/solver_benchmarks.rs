use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use pondus::formula::Formula;
use pondus::solver::engine::Solver;
use pondus::solver::heuristics::variable::VariableOrdering;

/// A reproducible random weighted instance: `num_hard` ternary hard clauses
/// and `num_soft` weighted binary soft clauses over `num_vars` variables.
fn random_instance(num_vars: usize, num_hard: usize, num_soft: usize, seed: u64) -> Formula {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let names: Vec<String> = (0..num_vars).map(|i| format!("v{i}")).collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();

    let literal = |rng: &mut ChaCha8Rng| {
        let var = rng.gen_range(0..num_vars);
        if rng.gen_bool(0.5) {
            format!("-v{var}")
        } else {
            format!("v{var}")
        }
    };

    let hard_text: Vec<Vec<String>> = (0..num_hard)
        .map(|_| (0..3).map(|_| literal(&mut rng)).collect())
        .collect();
    let soft_text: Vec<(Vec<String>, f64)> = (0..num_soft)
        .map(|_| {
            let clause: Vec<String> = (0..2).map(|_| literal(&mut rng)).collect();
            (clause, rng.gen_range(1..10) as f64)
        })
        .collect();

    let hard_refs: Vec<Vec<&str>> = hard_text
        .iter()
        .map(|c| c.iter().map(String::as_str).collect())
        .collect();
    let soft_refs: Vec<(Vec<&str>, f64)> = soft_text
        .iter()
        .map(|(c, w)| (c.iter().map(String::as_str).collect(), *w))
        .collect();

    Formula::new(&name_refs, &hard_refs, &soft_refs)
}

fn bench_variable_orderings(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_random_instance");

    for num_vars in [10usize, 13] {
        let formula = random_instance(num_vars, num_vars * 2, num_vars, 7);

        for (name, ordering) in [
            ("declaration", VariableOrdering::DeclarationOrder),
            ("mrv", VariableOrdering::MinimumRemainingValues),
            ("mcv", VariableOrdering::MostConstraining),
        ] {
            group.bench_with_input(
                BenchmarkId::new(name, num_vars),
                &formula,
                |b, formula| {
                    b.iter(|| {
                        let mut solver = Solver::new(black_box(formula), ordering, true);
                        black_box(solver.solve())
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_variable_orderings);
criterion_main!(benches);

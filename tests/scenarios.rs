use itertools::Itertools;
use nimscan::{
    classify::{LosingCondition, NimSum},
    domain::{Domain, restrict_domain},
    filter::filter_positions,
    games::{additive::AdditiveNim, multiplicative::MultiplicativeNim},
    generator::{GenerationMode, generate_positions},
    numeric::binomial::count_positions,
    partition::{Bucket, Partition},
    position::Position,
};

#[test]
fn additive_matches_brute_force() {
    let analysis = AdditiveNim::new(4).analyze(3).unwrap();

    let brute_force = (0..3)
        .map(|_| 0..=4u32)
        .multi_cartesian_product()
        .filter(|piles| piles.iter().fold(0, |acc, pile| acc ^ pile) == 0)
        .map(Position::new)
        .collect::<Vec<_>>();

    assert_eq!(analysis.generated, 125);
    assert_eq!(analysis.losing, brute_force);
    assert!(analysis.losing.iter().all(|p| p.nim_sum().is_zero()));
}

#[test]
fn multiplicative_ten_three() {
    assert_eq!(restrict_domain(10, 3).unwrap(), vec![1, 2, 4, 5, 7, 8, 10]);

    let game = MultiplicativeNim::new(10, 3).unwrap();
    let analysis = game
        .analyze(2, GenerationMode::UniqueCombinations)
        .unwrap();

    assert_eq!(analysis.generated, 28);
    assert_eq!(analysis.filtered, 25);
    for kept in [[1, 4], [2, 5], [4, 4], [10, 10]] {
        assert!(analysis.losing.contains(&Position::from(kept)));
    }
    // product is one modulo three but both piles are below three
    for excluded in [[1, 1], [2, 2]] {
        assert!(!analysis.losing.contains(&Position::from(excluded)));
    }
}

#[test]
fn stages_compose_through_free_functions() {
    let domain = Domain::restricted(12, 5).unwrap();
    let positions = generate_positions(&domain, 3, GenerationMode::AllTuples).collect::<Vec<_>>();
    assert_eq!(positions.len(), 10 * 10 * 10);

    let filtered = filter_positions(positions, 5).unwrap();
    let game = MultiplicativeNim::new(12, 5).unwrap();
    assert_eq!(
        game.find_losing_positions(filtered, 3).unwrap(),
        game.analyze(3, GenerationMode::AllTuples).unwrap().losing
    );
}

#[test]
fn unique_mode_count() {
    for max_value in 1..=15 {
        for prime in [2, 3, 5, 7] {
            let domain = Domain::restricted(max_value, prime).unwrap();
            for arity in 0..=3 {
                let generated =
                    generate_positions(&domain, arity, GenerationMode::UniqueCombinations).count();
                assert_eq!(
                    Some(generated as u128),
                    count_positions(domain.len(), arity)
                );
            }
        }
    }
}

#[test]
fn runs_are_reproducible() {
    let game = MultiplicativeNim::new(25, 7).unwrap();
    for mode in [GenerationMode::AllTuples, GenerationMode::UniqueCombinations] {
        assert_eq!(game.analyze(3, mode).unwrap(), game.analyze(3, mode).unwrap());
    }
    assert_eq!(
        AdditiveNim::new(7).analyze(4).unwrap(),
        AdditiveNim::new(7).analyze(4).unwrap()
    );
}

#[test]
fn partition_of_three_runs() {
    let a = vec![Position::from([1, 2, 3]), Position::from([4, 5, 6])];
    let b = vec![Position::from([4, 5, 6]), Position::from([7, 8, 9])];
    let c = vec![Position::from([7, 8, 9])];
    let partition = Partition::of_three(a, b, c).unwrap();

    let non_empty = partition
        .buckets()
        .filter(|(_, positions)| !positions.is_empty())
        .map(|(bucket, positions)| (bucket, positions.to_vec()))
        .collect::<Vec<_>>();
    assert_eq!(
        non_empty,
        vec![
            (Bucket::OnlyA, vec![Position::from([1, 2, 3])]),
            (Bucket::AAndBNotC, vec![Position::from([4, 5, 6])]),
            (Bucket::BAndCNotA, vec![Position::from([7, 8, 9])]),
        ]
    );
}

#[test]
fn partition_compares_pipelines() {
    // Losing positions with piles up to 4 are a subset of those with piles up to 6
    let small = AdditiveNim::new(4).analyze(3).unwrap().losing;
    let large = AdditiveNim::new(6).analyze(3).unwrap().losing;
    let partition = Partition::of_two(small.clone(), large.clone()).unwrap();

    assert!(partition.bucket(Bucket::OnlyA).is_empty());
    assert_eq!(partition.bucket(Bucket::AAndBNotC), small);
    assert_eq!(
        partition.bucket(Bucket::OnlyB).len(),
        large.len() - small.len()
    );
    assert_eq!(
        NimSum::new(3)
            .classify(partition.bucket(Bucket::OnlyB).to_vec())
            .unwrap(),
        partition.bucket(Bucket::OnlyB)
    );
}

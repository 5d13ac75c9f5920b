#![allow(dead_code)]

use criterion::Criterion;
use promm_math::{
    I256, Q96, U256,
    constants::FeeAmount,
    math::{
        bit_math::most_significant_bit,
        full_math::{mul_div, mul_div_rounding_up},
        liquidity_amounts::max_liquidity_for_amounts,
        sqrt_price_math::{get_amount_0_delta, get_next_sqrt_price_from_input},
        swap_math::compute_swap_step,
        tick_math::{get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio},
    },
};
use std::hint::black_box;

const LIQUIDITY: u128 = 1_000_000_000_000_000_000;

pub fn bench_tick_math(c: &mut Criterion) {
    c.bench_function("get_sqrt_ratio_at_tick", |b| {
        b.iter(|| get_sqrt_ratio_at_tick(black_box(-276_324)))
    });

    let sqrt_price = get_sqrt_ratio_at_tick(-276_324).unwrap() + U256::from(12_345u64);
    c.bench_function("get_tick_at_sqrt_ratio", |b| {
        b.iter(|| get_tick_at_sqrt_ratio(black_box(sqrt_price)))
    });
}

pub fn bench_full_math(c: &mut Criterion) {
    let a = U256::MAX - U256::from(7u8);
    let d = U256::MAX / U256::from(3u8);
    c.bench_function("mul_div_wide", |b| {
        b.iter(|| mul_div(black_box(a), black_box(Q96), black_box(d)))
    });
    c.bench_function("mul_div_rounding_up_wide", |b| {
        b.iter(|| mul_div_rounding_up(black_box(a), black_box(Q96), black_box(d)))
    });
}

pub fn bench_bit_math(c: &mut Criterion) {
    let x = U256::from(0x1234_5678_9abc_def0u64) << 100;
    c.bench_function("most_significant_bit", |b| {
        b.iter(|| most_significant_bit(black_box(x)))
    });
}

pub fn bench_sqrt_price_math(c: &mut Criterion) {
    let liquidity = U256::from(LIQUIDITY);
    let amount = U256::from(100_000_000_000_000_000u128);
    c.bench_function("get_next_sqrt_price_from_input", |b| {
        b.iter(|| {
            get_next_sqrt_price_from_input(black_box(Q96), liquidity, black_box(amount), true)
        })
    });

    let upper = get_sqrt_ratio_at_tick(1_000).unwrap();
    c.bench_function("get_amount_0_delta", |b| {
        b.iter(|| get_amount_0_delta(black_box(Q96), black_box(upper), liquidity, true))
    });
}

pub fn bench_liquidity_amounts(c: &mut Criterion) {
    let lower = get_sqrt_ratio_at_tick(-600).unwrap();
    let upper = get_sqrt_ratio_at_tick(600).unwrap();
    let amount = U256::from(LIQUIDITY);
    c.bench_function("max_liquidity_for_amounts", |b| {
        b.iter(|| {
            max_liquidity_for_amounts(black_box(Q96), lower, upper, amount, amount, true)
        })
    });
}

pub fn bench_swap_math(c: &mut Criterion) {
    let liquidity = U256::from(LIQUIDITY);
    let down = get_sqrt_ratio_at_tick(-100).unwrap();
    let up = get_sqrt_ratio_at_tick(100).unwrap();
    let small = I256::try_from(1_000_000_000_000_000i64).unwrap();
    let large = I256::try_from(100_000_000_000_000_000_000i128).unwrap();
    let fee = FeeAmount::Medium.units();

    let cases = [
        ("exact_in_amount_limited", down, small, true, true),
        ("exact_in_target_limited", up, large, true, false),
        ("exact_out_amount_limited", up, -small, false, true),
        ("exact_out_target_limited", down, -large, false, false),
    ];

    let mut group = c.benchmark_group("compute_swap_step");
    for (name, target, amount, exact_in, is_token0) in cases {
        group.bench_function(name, |b| {
            b.iter(|| {
                compute_swap_step(
                    Q96,
                    black_box(target),
                    liquidity,
                    black_box(amount),
                    fee,
                    exact_in,
                    is_token0,
                )
            })
        });
    }
    group.finish();
}

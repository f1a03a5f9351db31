// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for catalog construction, HTML rendering and request
// link composition in the pujaseva-core crate.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use pujaseva_core::catalog::Catalog;
use pujaseva_core::escape::escape_html;
use pujaseva_core::view::{Grid, render};
use pujaseva_core::{MessagingLink, PageLayout, ServiceRecord, UiEvent, UiState, build_catalog};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Sorting the built-in offerings and appending the sentinel.
fn bench_build_catalog(c: &mut Criterion) {
    c.bench_function("build_catalog", |b| {
        b.iter(|| black_box(build_catalog()));
    });
}

/// Rendering catalogs of growing size to HTML.
///
/// Every title carries characters that need escaping so the slow path of
/// `escape_html` is exercised.
fn bench_render_html(c: &mut Criterion) {
    let sizes: &[usize] = &[7, 100, 1000];

    let mut group = c.benchmark_group("render_html");
    for &size in sizes {
        let records = (0..size)
            .map(|i| {
                ServiceRecord::new(
                    format!("Puja <{i}> & \"friends\""),
                    "A ceremony description of ordinary length.",
                    format!("images/{i}.jpg"),
                )
            })
            .collect();
        let catalog = Catalog::from_records(records);
        group.bench_function(format!("{size} cards"), |b| {
            b.iter(|| {
                let mut grid = Grid::new();
                render(black_box(&catalog), Some(&mut grid));
                black_box(grid.view().to_html());
            });
        });
    }
    group.finish();
}

/// Escaping plain text (borrowed) versus text with entities (owned).
fn bench_escape(c: &mut Criterion) {
    let plain = "Satyanarayan Puja ".repeat(64);
    let hostile = "<b>A & B</b> \"quoted\" ".repeat(64);

    c.bench_function("escape_html plain", |b| {
        b.iter(|| black_box(escape_html(black_box(&plain))));
    });
    c.bench_function("escape_html hostile", |b| {
        b.iter(|| black_box(escape_html(black_box(&hostile))));
    });
}

/// Full submit dispatch: validation, message composition, encoding.
fn bench_submit(c: &mut Criterion) {
    use pujaseva_core::FormField;

    let mut state = UiState::new(build_catalog(), MessagingLink::default(), PageLayout::full());
    state.dispatch(UiEvent::FieldChanged(FormField::Name, "Asha".into()));
    state.dispatch(UiEvent::FieldChanged(FormField::Phone, "9999999999".into()));
    state.dispatch(UiEvent::ServiceSelected("Griha Pravesh".into()));
    state.dispatch(UiEvent::FieldChanged(
        FormField::Details,
        "Saturday morning, 3BHK flat".into(),
    ));

    c.bench_function("submit_request", |b| {
        b.iter(|| black_box(state.dispatch(UiEvent::Submit)));
    });
}

criterion_group!(
    benches,
    bench_build_catalog,
    bench_render_html,
    bench_escape,
    bench_submit,
);
criterion_main!(benches);

//! Benchmarks for drive channel lookups.
//!
//! These benchmarks measure the linear scan behind `drive_channel_list` on
//! drive lists of increasing length.

use content_wizard_state::state::{
    drive_channel_list, AppState, ChannelDescriptor, Drive, DriveMetadata, PageState,
    SelectedItems, WizardState,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn snapshot_with_drives(count: usize) -> AppState {
    let drive_list = (0..count)
        .map(|i| Drive {
            id: format!("drive-{}", i),
            metadata: DriveMetadata {
                channels: vec![ChannelDescriptor::new(serde_json::json!({ "id": i }))],
            },
        })
        .collect();
    AppState {
        page_state: PageState {
            wizard_state: WizardState {
                selected_items: SelectedItems { nodes: vec![] },
                available_channels: vec![],
                drive_list,
                channel_list: vec![],
            },
        },
    }
}

fn bench_drive_lookup(c: &mut Criterion) {
    for count in [4, 64, 1024] {
        let state = snapshot_with_drives(count);
        let last = format!("drive-{}", count - 1);
        c.bench_function(&format!("drive_channel_list_last_of_{}", count), |b| {
            let lookup = drive_channel_list(&state);
            b.iter(|| lookup(black_box(last.as_str())).len())
        });
        c.bench_function(&format!("drive_channel_list_miss_of_{}", count), |b| {
            let lookup = drive_channel_list(&state);
            b.iter(|| lookup(black_box("missing")).len())
        });
    }
}

criterion_group!(benches, bench_drive_lookup);
criterion_main!(benches);

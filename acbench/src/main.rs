use acbench::TrackingAllocator;

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

fn main() -> anyhow::Result<()> {
    acbench::run()
}

use anyhow::Result;

fn main() -> Result<()> {
    ds_katas::driver::driver_main()
}

use datastore_core::{Colors, RefLayout, dump};

pub struct DumpArgs {
    pub layout: RefLayout,
    pub raws: Vec<u64>,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let colors = Colors::new(args.color);
    print!("{}", dump(&args.layout, &args.raws, colors));
}

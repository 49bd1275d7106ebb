use name_components::{extract_name_components, ReferenceTables};

fn main() {
    env_logger::init();

    let tables = ReferenceTables::from_parts(
        [("long island", "Long Island, NY"), ("boston", "Boston, MA")],
        ["inc", "llc", "ltd"],
        Vec::<&str>::new(),
    );

    for raw in ["Apple Inc.", "Long Island Fishing LLC", "Boston Widgets Ltd"] {
        let record = extract_name_components(raw, &tables);

        println!(
            "{:?} => legal: {:?}, location: {:?}, base name: {:?}",
            record.raw, record.legal, record.location, record.base_name
        );
    }
}

/// `SearchBinding` usage example
use urlsearch::{Location, LocationListener, SearchBinding, scope};

fn render_filters() -> String {
    scope::with_current(|store| {
        format!("filters for {}: {:?}", store.pathname(), store.get_all("filter"))
    })
    .unwrap_or_else(|| "no location yet".to_string())
}

fn main() {
    let mut binding = SearchBinding::new();
    println!("{}", render_filters()); // no location yet

    // Router reports each navigation
    let navigations = [
        "/issues?filter=open",
        "/issues?filter=open&filter=mine",
        "/issues",
    ];
    for (i, href) in navigations.iter().enumerate() {
        let Ok(location) = Location::parse(href) else {
            continue;
        };
        binding.on_location_change(&location.with_key(format!("nav-{i}")));

        let _guard = binding.enter_scope();
        println!("{}", render_filters());
    }

    println!("stores built: {}", binding.generation()); // 3
}

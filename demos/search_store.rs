/// `SearchStore` usage example
use urlsearch::{Location, SearchStore};

fn main() {
    // Build a store from a router location
    let location = Location::new("/products").with_search("?category=books&tag=new&tag=sale");
    let mut store = SearchStore::from_location(&location);

    // Get values
    println!("category: {:?}", store.get("category")); // Some("books")
    println!("tags: {:?}", store.get_all("tag")); // ["new", "sale"]
    println!();

    // Append a value to a multi-value key
    store.append("tag", ["signed"]);
    println!("After append: {}", store.path()); // /products?category=books&tag=new&tag=sale&tag=signed
    println!();

    // Set (replaces all values, moves the key to the end)
    store.set("category", ["comics"]);
    println!("After set: {}", store.path()); // /products?tag=new&tag=sale&tag=signed&category=comics
    println!();

    // Remove a single value, then a whole key
    store.delete_values("tag", ["sale"]);
    println!("After delete_values: {}", store.path()); // /products?tag=new&tag=signed&category=comics
    store.delete("category");
    println!("After delete: {}", store.path()); // /products?tag=new&tag=signed
    println!();

    // Snapshot of every key
    println!("json: {:?}", store.json()); // {"tag": ["new", "signed"]}

    // Start over on the same path
    let fresh = store.create().set("page", ["1"]).path();
    println!("Fresh: {fresh}"); // /products?page=1
}

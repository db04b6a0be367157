fn main() {
    if let Err(err) = skt_node::run_entry(std::env::args().skip(1)) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

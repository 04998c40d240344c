use annc_kernel::document::DocumentKind;
use annc_kernel::domain::constants::{PACK_KEYS, PROGRAMME_COLUMNS};

pub fn print_fields(kind: DocumentKind) {
    let keys: &[&str] = match kind {
        DocumentKind::Programmes => &PROGRAMME_COLUMNS,
        DocumentKind::Packs => &PACK_KEYS,
    };
    for (index, key) in keys.iter().enumerate() {
        println!("{:>2}  {key}", index + 1);
    }
}

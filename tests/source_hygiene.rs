//! Fails when library/binary code calls `unwrap()` or `expect()`.
//!
//! Test code (`#[cfg(test)]` modules and `#[test]` functions) is exempt.
//! Calls inside macro bodies (e.g. `rsx!`) are not seen by `syn` and so are
//! not checked.

use std::path::{Path, PathBuf};

use syn::visit::{self, Visit};
use walkdir::WalkDir;

struct PanicFinder {
    file: PathBuf,
    hits: Vec<String>,
}

fn is_test_attr(attr: &syn::Attribute) -> bool {
    if attr.path().is_ident("test") {
        return true;
    }
    if !attr.path().is_ident("cfg") {
        return false;
    }
    attr.parse_args::<syn::Ident>()
        .map(|ident| ident == "test")
        .unwrap_or(false)
}

impl<'ast> Visit<'ast> for PanicFinder {
    fn visit_item_mod(&mut self, item: &'ast syn::ItemMod) {
        if item.attrs.iter().any(is_test_attr) {
            return;
        }
        visit::visit_item_mod(self, item);
    }

    fn visit_item_fn(&mut self, item: &'ast syn::ItemFn) {
        if item.attrs.iter().any(is_test_attr) {
            return;
        }
        visit::visit_item_fn(self, item);
    }

    fn visit_expr_method_call(&mut self, call: &'ast syn::ExprMethodCall) {
        let method = call.method.to_string();
        if method == "unwrap" || method == "expect" {
            self.hits
                .push(format!("{}: .{}()", self.file.display(), method));
        }
        visit::visit_expr_method_call(self, call);
    }
}

fn rust_sources(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|entry| entry.into_path())
        .collect()
}

#[test]
fn test_no_unwrap_or_expect_outside_tests() {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let files = rust_sources(&src);
    assert!(!files.is_empty(), "no sources found under {}", src.display());

    let mut hits = Vec::new();
    for path in files {
        let source = std::fs::read_to_string(&path).unwrap();
        let file = syn::parse_file(&source)
            .unwrap_or_else(|e| panic!("failed to parse {}: {}", path.display(), e));

        let mut finder = PanicFinder {
            file: path,
            hits: Vec::new(),
        };
        finder.visit_file(&file);
        hits.extend(finder.hits);
    }

    assert!(hits.is_empty(), "panicking calls found:\n{}", hits.join("\n"));
}

#[test]
fn test_finder_skips_test_modules() {
    let file: syn::File = syn::parse_str(
        r#"
        fn live() -> u8 { Some(1).unwrap() }

        #[cfg(test)]
        mod tests {
            fn helper() { None::<u8>.expect("fine in tests"); }
        }
        "#,
    )
    .unwrap();

    let mut finder = PanicFinder {
        file: PathBuf::from("inline.rs"),
        hits: Vec::new(),
    };
    finder.visit_file(&file);

    assert_eq!(finder.hits, vec!["inline.rs: .unwrap()".to_string()]);
}

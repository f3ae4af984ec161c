use regex::Regex;

/// Labels inferred from a filename stem, e.g. `SmithMobyDick` names the
/// translator "Smith" and the work "MobyDick".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub translator: String,
    pub work: String,
}

/// Stem decomposition strategy, so corpora with other naming conventions
/// can plug in their own splitter.
pub trait StemSplit {
    fn split(&self, stem: &str) -> Labels;
}

/// Default splitter for CamelCase stems. Capitalized runs (`[A-Z][a-z]*`)
/// delimit the stem: the first one is the translator, and everything after
/// it, capitalized or not, is concatenated into the work title. A stem with
/// no capitalized run comes back whole as the translator with an empty
/// work title.
pub struct CamelSplitter {
    run: Regex,
}

impl Default for CamelSplitter {
    fn default() -> Self {
        Self {
            run: Regex::new(r"[A-Z][a-z]*").expect("literal regex"),
        }
    }
}

impl StemSplit for CamelSplitter {
    fn split(&self, stem: &str) -> Labels {
        // Fragments in order: capitalized runs plus the non-empty text
        // between them.
        let mut fragments: Vec<(bool, &str)> = Vec::new();
        let mut last = 0;
        for run in self.run.find_iter(stem) {
            if run.start() > last {
                fragments.push((false, &stem[last..run.start()]));
            }
            fragments.push((true, run.as_str()));
            last = run.end();
        }
        if last < stem.len() {
            fragments.push((false, &stem[last..]));
        }

        match fragments.iter().position(|(capitalized, _)| *capitalized) {
            Some(first) => Labels {
                translator: fragments[first].1.to_string(),
                work: fragments[first + 1..].iter().map(|(_, f)| *f).collect(),
            },
            None => Labels {
                translator: stem.to_string(),
                work: String::new(),
            },
        }
    }
}

use autoqc::run;
use autoqc::QcError;

fn main() -> Result<(), QcError> {
    run(std::env::args().collect())
}

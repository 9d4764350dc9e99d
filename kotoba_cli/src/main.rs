use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
    sync::Arc,
};

use clap::Parser;
use kotoba_core::{
    CompositeDictionary, Dictionary, DictionaryRegistry, Relation, config::LookupConfig,
};
use kotoba_dict::{SystemDictionary, UserDictionary};
use tracing::{error, info};

/// 词典查询 demo：前缀 / 预测 / 反查
#[derive(Parser, Debug)]
#[command(name = "kotoba_cli")]
struct Args {
    /// 系统词典（TSV）
    #[arg(long, value_name = "PATH")]
    dict: Option<PathBuf>,

    /// 用户词典（TSV）
    #[arg(long, value_name = "PATH")]
    user_dict: Option<PathBuf>,

    /// 配置文件（TOML）
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// 每次查询最多打印多少条
    #[arg(long)]
    limit: Option<usize>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> kotoba_core::Result<()> {
    let config = load_config(&args)?;
    let dict_path = config.system_dictionary.clone().unwrap_or_else(default_dict_path);

    let mut composite = CompositeDictionary::new().with(Arc::new(SystemDictionary::from_path(&dict_path)?));
    if let Some(path) = &config.user_dictionary {
        let user = UserDictionary::new();
        let n = user.load_path(path)?;
        info!(path = %path.display(), entries = n, "loaded user dictionary");
        composite.push(Arc::new(user));
    }

    let registry = DictionaryRegistry::global();
    let active: Arc<dyn Dictionary> = Arc::new(composite);
    registry.set_dictionary(Some(active));
    let result = repl(registry, &config, &dict_path);
    registry.set_dictionary(None);
    result
}

/// 配置文件打底，命令行参数覆盖。
fn load_config(args: &Args) -> kotoba_core::Result<LookupConfig> {
    let mut config = match &args.config {
        Some(path) => LookupConfig::from_toml_str(&fs::read_to_string(path)?)?,
        None => LookupConfig::default(),
    };
    if let Some(p) = &args.dict {
        config.system_dictionary = Some(p.clone());
    }
    if let Some(p) = &args.user_dict {
        config.user_dictionary = Some(p.clone());
    }
    if let Some(n) = args.limit {
        config.print_limit = n;
    }
    Ok(config)
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("kotoba=debug,info")
        } else {
            EnvFilter::new("kotoba=info,warn")
        }
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn default_dict_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("asset").join("lexicon.tsv")
}

fn repl(registry: &DictionaryRegistry, config: &LookupConfig, dict_path: &PathBuf) -> kotoba_core::Result<()> {
    let dict = registry.require()?;
    // 配置了 max_candidates 时，命中过多的查询（比如很短的 `c`）会让分配器 panic，进程直接退出
    let mut alloc = config.allocator();
    let mut out = io::stdout();
    let mut line = String::new();
    writeln!(out, "kotoba demo | dict: {}", dict_path.display())?;
    writeln!(out, "p <读音> 前缀查询；c <读音> 预测；r <表记> 反查；:q 退出")?;

    loop {
        line.clear();
        write!(out, "kotoba> ")?;
        out.flush()?;
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == ":q" || input == ":quit" || input == ":exit" {
            break;
        }

        let Some((relation, query)) = parse_command(input) else {
            writeln!(out, "无效命令：{input}")?;
            continue;
        };

        // 每行一次查询过程：先释放上一轮的候选
        alloc.reset();
        let chain = dict.lookup(relation, query, &mut alloc);
        let mut cands: Vec<_> = alloc.candidates(chain).iter().collect();
        // 仅为展示排序，链本身无序
        cands.sort_by(|a, b| a.cost.cmp(&b.cost).then_with(|| a.reading.cmp(&b.reading)));

        writeln!(out, "{:?} {query}: {} 条", relation, cands.len())?;
        for (i, c) in cands.iter().take(config.print_limit).enumerate() {
            writeln!(out, "{}. {}\t{}\t{}", i + 1, c.reading, c.surface, c.cost)?;
        }
    }

    Ok(())
}

fn parse_command(input: &str) -> Option<(Relation, &str)> {
    let (cmd, rest) = input.split_once(char::is_whitespace)?;
    let query = rest.trim();
    if query.is_empty() {
        return None;
    }
    let relation = match cmd {
        "p" | "prefix" => Relation::Prefix,
        "c" | "predict" => Relation::Predictive,
        "r" | "reverse" => Relation::Reverse,
        _ => return None,
    };
    Some((relation, query))
}

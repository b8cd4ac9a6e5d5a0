use crate::cli;
use color_eyre::eyre::{eyre, Result};
use duct::cmd;
use std::env;
use std::path::{Path, PathBuf};

pub fn install(args: &cli::InstallArgs) -> Result<()> {
    println!("Building {} in release mode...", args.name);

    cmd!("cargo", "build", "--bin", &args.name, "--release").run()?;

    let install_dir = resolve_install_dir(args.path.as_deref())?;
    if !install_dir.exists() {
        println!("Creating directory: {}", install_dir.display());
        std::fs::create_dir_all(&install_dir)?;
    }

    let source_path = PathBuf::from("target").join("release").join(&args.name);
    let dest_path = install_dir.join(&args.name);

    println!("Installing {} to {}", args.name, dest_path.display());
    std::fs::copy(&source_path, &dest_path)?;
    make_executable(&dest_path)?;

    println!(
        "✓ Successfully installed {} to {}",
        args.name,
        dest_path.display()
    );

    warn_if_not_in_path(&install_dir);

    Ok(())
}

/// Explicit path, or `~/.local/bin`.
fn resolve_install_dir(path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = path {
        return Ok(PathBuf::from(path));
    }

    let home = env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map_err(|_| eyre!("Could not determine home directory, pass --path explicitly"))?;

    Ok(PathBuf::from(home).join(".local").join("bin"))
}

fn make_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(path, perms)?;
    }

    // Freshly copied binaries lose their ad-hoc signature on macOS and get killed on launch.
    #[cfg(target_os = "macos")]
    {
        let _ = cmd!("xattr", "-cr", path).run();
        if let Err(e) = cmd!("codesign", "--force", "--sign", "-", path).run() {
            eprintln!("Warning: Failed to re-sign binary: {e}");
            eprintln!(
                "You may need to run: codesign --force --sign - {}",
                path.display()
            );
        }
    }

    Ok(())
}

fn warn_if_not_in_path(install_dir: &Path) {
    let Ok(path_var) = env::var("PATH") else {
        return;
    };

    if !env::split_paths(&path_var).any(|p| p == install_dir) {
        println!("\nNote: {} is not in your PATH.", install_dir.display());
        println!("Add it to your PATH by adding this line to your shell config:");
        println!("  export PATH=\"{}:$PATH\"", install_dir.display());
    }
}

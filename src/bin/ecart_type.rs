// src/bin/ecart_type.rs
//
// Écart-type (population) d’une série lue sur l’entrée standard.
//
//   echo "2 4 4 4 5 5 7 9" | ecart_type
//   2
//
// Calcul fait uniquement avec les primitives du noyau (div, sub, puissance, racine).

use std::io::Read;

use anyhow::{bail, Context, Result};

use calculatrice_gazorpazorp::noyau::{primitives, Nombre};

fn main() -> Result<()> {
    env_logger::init();

    let mut texte = String::new();
    std::io::stdin()
        .read_to_string(&mut texte)
        .context("lecture de l’entrée standard")?;

    let serie = lire_serie(&texte)?;
    println!("{}", ecart_type(&serie)?);
    Ok(())
}

fn lire_serie(texte: &str) -> Result<Vec<Nombre>> {
    texte
        .split_whitespace()
        .map(|mot| Nombre::depuis_litteral(mot).with_context(|| format!("valeur {mot:?}")))
        .collect()
}

fn effectif(serie: &[Nombre]) -> Result<Nombre> {
    let n = i64::try_from(serie.len()).context("série trop longue")?;
    Ok(Nombre::Entier(n))
}

fn moyenne(serie: &[Nombre]) -> Result<Nombre> {
    let mut somme = Nombre::Entier(0);
    for &x in serie {
        somme = primitives::add(somme, x)?;
    }
    Ok(primitives::div(somme, effectif(serie)?)?)
}

fn ecart_type(serie: &[Nombre]) -> Result<Nombre> {
    if serie.is_empty() {
        bail!("série vide : aucun nombre sur l’entrée standard");
    }

    let m = moyenne(serie)?;
    log::debug!("moyenne = {m}");

    let deux = Nombre::Entier(2);
    let carres = serie
        .iter()
        .map(|&x| primitives::puissance(primitives::sub(x, m)?, deux))
        .collect::<Result<Vec<_>, _>>()?;

    let variance = moyenne(&carres)?;
    log::debug!("variance = {variance}");

    Ok(primitives::racine(variance, deux)?)
}

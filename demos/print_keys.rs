use btc_keyderive::prelude::*;

fn main() -> Result<()> {
    let private_key = PrivKey::from_hex_str("18E14A7B6A307F426A94F8114701E7C8E774E7F9A47E2C2035DB29A206321725")?;
    print_vals(&private_key)?;

    println!();
    print_vals(&PrivKey::new_rand())
}

fn print_vals(private_key: &PrivKey) -> Result<()> {
    let public_key: PubKey = private_key.pub_key()?;

    //The flag passed to to_address/to_integer selects 04 || X || Y when true
    let address_c = public_key.to_address(true);
    let address_u = public_key.to_address(false);

    println!("Private Key Dec:     {}", private_key.to_dec_string());
    println!("Private Key Hex:     {}", private_key.to_hex_string());
    println!("Private Key WIF M C: {}", private_key.to_wif(true, Network::Bitcoin));
    println!("Private Key WIF M U: {}", private_key.to_wif(false, Network::Bitcoin));
    println!("Private Key WIF T C: {}", private_key.to_wif(true, Network::Testnet));
    println!("Private Key WIF T U: {}", private_key.to_wif(false, Network::Testnet));
    println!();
    println!("Public Key Dec C:    {}", public_key.to_integer(true).to_str_radix(10));
    println!("Public Key Hex C:    {}", public_key.to_integer(true).to_str_radix(16));
    println!("Public Key Dec U:    {}", public_key.to_integer(false).to_str_radix(10));
    println!("Public Key Hex U:    {}", public_key.to_integer(false).to_str_radix(16));
    println!();
    println!("Address C:           {}", address_c.to_base58());
    println!("Address U:           {}", address_u.to_base58());
    println!();
    println!("C:                   Compressed");
    println!("U:                   Uncompressed");
    println!("M:                   Mainnet");
    println!("T:                   Testnet");
    println!("WIF:                 Wallet Import Format");

    Ok(())
}

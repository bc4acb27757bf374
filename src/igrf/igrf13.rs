//! IGRF-13 coefficient table: 25 main-field epochs from 1900.0 to 2020.0 every five years and the
//! predictive secular variation for 2020.0 to 2025.0. Reference radius 6371.2 km. Epochs before
//! 2000.0 are tabulated to degree 10, later ones to degree 13.
//!
//! Rows follow the layout of the IAGA `igrf13coeffs.txt` release: one row per coefficient in the
//! packed ordering g(n,0), g(n,1), h(n,1), ..., g(n,n), h(n,n), one column per epoch, then the
//! secular variation rate in nT/yr. Degrees above an epoch's truncation read as zero and are
//! dropped when the epoch is built.

use crate::igrf::coefficients::{packed_len, GaussCoefficients};
use crate::igrf::store::{CoefficientStore, Epoch};
use crate::utils::constants::{IGRF_MAX_DEGREE, SECULAR_VARIATION_SPAN_YEARS};
use std::sync::OnceLock;
use tracing::debug;

const EPOCH_COUNT: usize = 25;
const FIRST_EPOCH: i32 = 1900;
const EPOCH_STEP: i32 = 5;
/// Epochs from this year on carry coefficients to degree 13
const FULL_DEGREE_FROM: i32 = 2000;
const EARLY_MAX_DEGREE: usize = 10;

/// Coefficient kind (`'g'` or `'h'`), degree, order, values at each epoch, secular variation
type TableRow = (char, usize, usize, [f64; EPOCH_COUNT], f64);

static IGRF13: OnceLock<CoefficientStore> = OnceLock::new();

/// The IGRF-13 store, built on first use and shared afterwards
pub fn igrf13() -> &'static CoefficientStore {
    IGRF13.get_or_init(|| {
        debug!("Building embedded IGRF-13 coefficient table");
        build_igrf13()
    })
}

fn epoch_year(column: usize) -> i32 {
    FIRST_EPOCH + EPOCH_STEP * column as i32
}

fn epoch_degree(year: i32) -> usize {
    if year < FULL_DEGREE_FROM {
        EARLY_MAX_DEGREE
    } else {
        IGRF_MAX_DEGREE
    }
}

/// Column of the table in packed order, truncated to `max_degree`
fn packed_column<F>(max_degree: usize, value: F) -> Vec<f64>
where
    F: Fn(&TableRow) -> f64,
{
    IGRF13_ROWS
        .iter()
        .take(packed_len(max_degree))
        .map(value)
        .collect()
}

fn build_igrf13() -> CoefficientStore {
    // Rows are in packed order and the epochs are increasing
    let epochs = (0..EPOCH_COUNT)
        .map(|column| {
            let year = epoch_year(column);
            let degree = epoch_degree(year);
            let packed = packed_column(degree, |row| row.3[column]);
            Epoch::new(year, GaussCoefficients::unpack(degree, &packed))
        })
        .collect();
    let rates = packed_column(IGRF_MAX_DEGREE, |row| row.4);
    CoefficientStore::from_verified(
        epochs,
        GaussCoefficients::unpack(IGRF_MAX_DEGREE, &rates),
        SECULAR_VARIATION_SPAN_YEARS,
    )
}

/// IGRF-13 Gauss coefficients (nT) for 1900.0, 1905.0, ..., 2020.0 and the 2020-25 secular
/// variation (nT/yr). Definitive (DGRF) through 2015.0.
#[rustfmt::skip]
const IGRF13_ROWS: [TableRow; packed_len(IGRF_MAX_DEGREE)] = [
    ('g', 1, 0, [-31543.0, -31464.0, -31354.0, -31212.0, -31060.0, -30926.0, -30805.0, -30715.0, -30654.0, -30594.0, -30554.0, -30500.0, -30421.0, -30334.0, -30220.0, -30100.0, -29992.0, -29873.0, -29775.0, -29692.0, -29619.4, -29554.63, -29496.57, -29441.46, -29404.8], 5.7),
    ('g', 1, 1, [-2298.0, -2298.0, -2297.0, -2306.0, -2317.0, -2318.0, -2316.0, -2306.0, -2292.0, -2285.0, -2250.0, -2215.0, -2169.0, -2119.0, -2068.0, -2013.0, -1956.0, -1905.0, -1848.0, -1784.0, -1728.2, -1669.05, -1586.42, -1501.77, -1450.9], 7.4),
    ('h', 1, 1, [5922.0, 5909.0, 5898.0, 5875.0, 5845.0, 5817.0, 5808.0, 5812.0, 5821.0, 5810.0, 5815.0, 5820.0, 5791.0, 5776.0, 5737.0, 5675.0, 5604.0, 5500.0, 5406.0, 5306.0, 5186.1, 5077.99, 4944.26, 4795.99, 4652.5], -25.9),
    ('g', 2, 0, [-677.0, -728.0, -769.0, -802.0, -839.0, -893.0, -951.0, -1018.0, -1106.0, -1244.0, -1341.0, -1440.0, -1555.0, -1662.0, -1781.0, -1902.0, -1997.0, -2072.0, -2131.0, -2200.0, -2267.7, -2337.24, -2396.06, -2445.88, -2499.6], -11.0),
    ('g', 2, 1, [2905.0, 2928.0, 2948.0, 2956.0, 2959.0, 2969.0, 2980.0, 2984.0, 2981.0, 2990.0, 2998.0, 3003.0, 3002.0, 2997.0, 3000.0, 3010.0, 3027.0, 3044.0, 3059.0, 3070.0, 3068.4, 3047.69, 3026.34, 3012.20, 2982.0], -7.0),
    ('h', 2, 1, [-1061.0, -1086.0, -1128.0, -1191.0, -1259.0, -1334.0, -1424.0, -1520.0, -1614.0, -1702.0, -1810.0, -1898.0, -1967.0, -2016.0, -2047.0, -2067.0, -2129.0, -2197.0, -2279.0, -2366.0, -2481.6, -2594.50, -2708.54, -2845.41, -2991.6], -30.2),
    ('g', 2, 2, [924.0, 1041.0, 1176.0, 1309.0, 1407.0, 1471.0, 1517.0, 1550.0, 1566.0, 1578.0, 1576.0, 1581.0, 1590.0, 1594.0, 1611.0, 1632.0, 1663.0, 1687.0, 1686.0, 1681.0, 1670.9, 1657.76, 1668.17, 1676.35, 1677.0], -2.1),
    ('h', 2, 2, [1121.0, 1065.0, 1000.0, 917.0, 823.0, 728.0, 644.0, 586.0, 528.0, 477.0, 381.0, 291.0, 206.0, 114.0, 25.0, -68.0, -200.0, -306.0, -373.0, -413.0, -458.0, -515.43, -575.73, -642.17, -734.6], -22.4),
    ('g', 3, 0, [1022.0, 1037.0, 1058.0, 1084.0, 1111.0, 1140.0, 1172.0, 1206.0, 1240.0, 1282.0, 1297.0, 1302.0, 1302.0, 1297.0, 1287.0, 1276.0, 1281.0, 1296.0, 1314.0, 1335.0, 1339.6, 1336.30, 1339.85, 1350.33, 1363.2], 2.2),
    ('g', 3, 1, [-1469.0, -1494.0, -1524.0, -1559.0, -1600.0, -1645.0, -1692.0, -1740.0, -1790.0, -1834.0, -1889.0, -1944.0, -1992.0, -2038.0, -2091.0, -2144.0, -2180.0, -2208.0, -2239.0, -2267.0, -2288.0, -2305.83, -2326.54, -2352.26, -2381.2], -5.9),
    ('h', 3, 1, [-330.0, -357.0, -389.0, -421.0, -445.0, -462.0, -480.0, -494.0, -499.0, -499.0, -476.0, -462.0, -414.0, -404.0, -366.0, -333.0, -336.0, -310.0, -284.0, -262.0, -227.6, -198.86, -160.40, -115.29, -82.1], 6.0),
    ('g', 3, 2, [1256.0, 1239.0, 1223.0, 1212.0, 1205.0, 1202.0, 1205.0, 1215.0, 1232.0, 1255.0, 1274.0, 1288.0, 1289.0, 1292.0, 1278.0, 1260.0, 1251.0, 1247.0, 1248.0, 1249.0, 1252.1, 1246.39, 1232.10, 1225.85, 1236.2], 3.1),
    ('h', 3, 2, [3.0, 34.0, 62.0, 84.0, 103.0, 119.0, 133.0, 146.0, 163.0, 186.0, 206.0, 216.0, 224.0, 240.0, 251.0, 262.0, 271.0, 284.0, 293.0, 302.0, 293.4, 269.72, 251.75, 245.04, 241.9], -1.1),
    ('g', 3, 3, [572.0, 635.0, 705.0, 778.0, 839.0, 881.0, 907.0, 918.0, 916.0, 913.0, 896.0, 882.0, 878.0, 856.0, 838.0, 830.0, 833.0, 829.0, 802.0, 759.0, 714.5, 672.51, 633.73, 581.69, 525.7], -12.0),
    ('h', 3, 3, [523.0, 480.0, 425.0, 360.0, 293.0, 229.0, 166.0, 101.0, 43.0, -11.0, -46.0, -83.0, -130.0, -165.0, -196.0, -223.0, -252.0, -297.0, -352.0, -427.0, -491.1, -524.72, -537.03, -538.70, -543.4], 0.5),
    ('g', 4, 0, [876.0, 880.0, 884.0, 887.0, 889.0, 891.0, 896.0, 903.0, 914.0, 944.0, 954.0, 958.0, 957.0, 957.0, 952.0, 946.0, 938.0, 936.0, 939.0, 940.0, 932.3, 920.55, 912.66, 907.42, 903.0], -1.2),
    ('g', 4, 1, [628.0, 643.0, 660.0, 678.0, 695.0, 711.0, 727.0, 744.0, 762.0, 776.0, 792.0, 796.0, 800.0, 804.0, 800.0, 791.0, 782.0, 780.0, 780.0, 780.0, 786.8, 797.96, 808.97, 813.68, 809.5], -1.6),
    ('h', 4, 1, [195.0, 203.0, 211.0, 218.0, 220.0, 216.0, 205.0, 188.0, 169.0, 144.0, 136.0, 133.0, 135.0, 148.0, 167.0, 191.0, 212.0, 232.0, 247.0, 262.0, 272.6, 282.07, 286.48, 283.54, 281.9], -0.1),
    ('g', 4, 2, [660.0, 653.0, 644.0, 631.0, 616.0, 601.0, 584.0, 565.0, 550.0, 544.0, 528.0, 510.0, 504.0, 479.0, 461.0, 438.0, 398.0, 361.0, 325.0, 290.0, 250.0, 210.65, 166.58, 120.49, 86.3], -5.9),
    ('h', 4, 2, [-69.0, -77.0, -90.0, -109.0, -134.0, -163.0, -195.0, -226.0, -252.0, -276.0, -278.0, -274.0, -278.0, -269.0, -266.0, -265.0, -257.0, -249.0, -240.0, -236.0, -231.9, -225.23, -211.03, -188.43, -158.4], 6.5),
    ('g', 4, 3, [-361.0, -380.0, -400.0, -416.0, -424.0, -426.0, -422.0, -415.0, -405.0, -421.0, -408.0, -397.0, -394.0, -390.0, -395.0, -405.0, -419.0, -424.0, -423.0, -418.0, -403.0, -379.86, -356.83, -334.85, -309.4], 5.2),
    ('h', 4, 3, [-210.0, -201.0, -189.0, -173.0, -153.0, -130.0, -109.0, -90.0, -72.0, -55.0, -37.0, -23.0, 3.0, 13.0, 26.0, 39.0, 53.0, 69.0, 84.0, 97.0, 119.8, 145.15, 164.46, 180.95, 199.7], 3.6),
    ('g', 4, 4, [134.0, 146.0, 160.0, 178.0, 199.0, 217.0, 234.0, 249.0, 265.0, 304.0, 303.0, 290.0, 269.0, 252.0, 234.0, 216.0, 199.0, 170.0, 141.0, 122.0, 111.3, 100.00, 89.40, 70.38, 48.0], -5.1),
    ('h', 4, 4, [-75.0, -65.0, -55.0, -51.0, -57.0, -70.0, -90.0, -114.0, -141.0, -178.0, -210.0, -230.0, -255.0, -269.0, -279.0, -288.0, -297.0, -297.0, -299.0, -306.0, -303.8, -305.36, -309.72, -329.23, -349.7], -5.0),
    ('g', 5, 0, [-184.0, -192.0, -201.0, -211.0, -221.0, -230.0, -237.0, -241.0, -241.0, -253.0, -240.0, -229.0, -222.0, -219.0, -216.0, -218.0, -218.0, -214.0, -214.0, -214.0, -218.8, -227.00, -230.87, -232.91, -234.3], -0.3),
    ('g', 5, 1, [328.0, 328.0, 327.0, 327.0, 326.0, 326.0, 327.0, 329.0, 334.0, 346.0, 349.0, 360.0, 362.0, 358.0, 359.0, 356.0, 357.0, 355.0, 353.0, 352.0, 351.4, 354.41, 357.29, 360.14, 363.2], 0.5),
    ('h', 5, 1, [-210.0, -193.0, -172.0, -148.0, -122.0, -96.0, -72.0, -51.0, -33.0, -12.0, 3.0, 15.0, 16.0, 19.0, 26.0, 31.0, 46.0, 47.0, 46.0, 46.0, 43.8, 42.72, 44.58, 46.98, 47.7], 0.0),
    ('g', 5, 2, [264.0, 259.0, 253.0, 245.0, 236.0, 226.0, 218.0, 211.0, 208.0, 194.0, 211.0, 230.0, 242.0, 254.0, 262.0, 264.0, 261.0, 253.0, 245.0, 235.0, 222.3, 208.95, 200.26, 192.35, 187.8], -0.6),
    ('h', 5, 2, [53.0, 56.0, 57.0, 58.0, 58.0, 58.0, 60.0, 64.0, 71.0, 95.0, 103.0, 110.0, 125.0, 128.0, 139.0, 148.0, 150.0, 150.0, 154.0, 165.0, 171.9, 180.25, 189.01, 196.98, 208.3], 2.5),
    ('g', 5, 3, [5.0, -1.0, -9.0, -16.0, -23.0, -28.0, -32.0, -33.0, -33.0, -20.0, -20.0, -23.0, -26.0, -31.0, -42.0, -59.0, -74.0, -93.0, -109.0, -118.0, -130.4, -136.54, -141.05, -140.94, -140.7], 0.2),
    ('h', 5, 3, [-33.0, -32.0, -33.0, -34.0, -38.0, -44.0, -53.0, -64.0, -75.0, -67.0, -87.0, -98.0, -117.0, -126.0, -139.0, -152.0, -151.0, -154.0, -153.0, -143.0, -133.1, -123.45, -118.06, -119.14, -121.2], -0.6),
    ('g', 5, 4, [-86.0, -93.0, -102.0, -111.0, -119.0, -125.0, -131.0, -136.0, -141.0, -142.0, -147.0, -152.0, -156.0, -157.0, -160.0, -159.0, -162.0, -164.0, -165.0, -166.0, -168.6, -168.05, -163.17, -157.40, -151.2], 1.3),
    ('h', 5, 4, [-124.0, -125.0, -126.0, -126.0, -125.0, -122.0, -118.0, -115.0, -113.0, -119.0, -122.0, -121.0, -114.0, -97.0, -91.0, -83.0, -78.0, -75.0, -69.0, -55.0, -39.3, -19.57, -0.01, 16.15, 32.3], 3.0),
    ('g', 5, 5, [-16.0, -26.0, -38.0, -51.0, -62.0, -69.0, -74.0, -76.0, -76.0, -82.0, -76.0, -69.0, -63.0, -62.0, -56.0, -49.0, -48.0, -46.0, -36.0, -17.0, -12.9, -13.55, -8.03, 4.30, 13.5], 0.9),
    ('h', 5, 5, [3.0, 11.0, 21.0, 32.0, 43.0, 51.0, 58.0, 64.0, 69.0, 82.0, 80.0, 78.0, 81.0, 81.0, 83.0, 88.0, 92.0, 95.0, 97.0, 107.0, 106.3, 103.85, 101.04, 100.12, 98.9], 0.3),
    ('g', 6, 0, [63.0, 62.0, 62.0, 61.0, 61.0, 61.0, 60.0, 59.0, 57.0, 59.0, 54.0, 47.0, 46.0, 45.0, 43.0, 45.0, 48.0, 53.0, 61.0, 68.0, 72.3, 73.60, 72.78, 69.55, 66.0], -0.5),
    ('g', 6, 1, [61.0, 60.0, 58.0, 57.0, 55.0, 54.0, 53.0, 53.0, 54.0, 57.0, 57.0, 57.0, 58.0, 61.0, 64.0, 66.0, 66.0, 65.0, 65.0, 67.0, 68.2, 69.56, 68.69, 67.57, 65.5], -0.3),
    ('h', 6, 1, [-9.0, -7.0, -6.0, -5.0, -5.0, -5.0, -4.0, -4.0, -4.0, 6.0, -1.0, -9.0, -10.0, -11.0, -12.0, -13.0, -15.0, -16.0, -16.0, -17.0, -17.4, -20.33, -20.90, -20.61, -19.1], 0.0),
    ('g', 6, 2, [-11.0, -11.0, -11.0, -10.0, -10.0, -9.0, -9.0, -8.0, -7.0, 6.0, 4.0, 3.0, 1.0, 8.0, 15.0, 28.0, 42.0, 51.0, 59.0, 68.0, 74.2, 76.74, 75.92, 72.79, 72.9], 0.4),
    ('h', 6, 2, [83.0, 86.0, 89.0, 93.0, 96.0, 99.0, 102.0, 104.0, 105.0, 100.0, 99.0, 96.0, 99.0, 100.0, 100.0, 99.0, 93.0, 88.0, 82.0, 72.0, 63.7, 54.75, 44.18, 33.30, 25.1], -1.6),
    ('g', 6, 3, [-217.0, -221.0, -224.0, -228.0, -233.0, -238.0, -242.0, -246.0, -249.0, -246.0, -247.0, -247.0, -237.0, -228.0, -212.0, -198.0, -192.0, -185.0, -178.0, -170.0, -160.9, -151.34, -141.40, -129.85, -121.5], 1.3),
    ('h', 6, 3, [2.0, 4.0, 5.0, 8.0, 11.0, 14.0, 19.0, 25.0, 33.0, 16.0, 33.0, 48.0, 60.0, 68.0, 72.0, 75.0, 71.0, 69.0, 69.0, 67.0, 65.1, 63.63, 61.54, 58.74, 52.8], -1.3),
    ('g', 6, 4, [-58.0, -57.0, -54.0, -51.0, -46.0, -40.0, -32.0, -25.0, -18.0, -25.0, -16.0, -8.0, -1.0, 4.0, 2.0, 1.0, 4.0, 4.0, 3.0, -1.0, -5.9, -14.58, -22.83, -28.93, -36.2], -1.4),
    ('h', 6, 4, [-35.0, -32.0, -29.0, -26.0, -22.0, -18.0, -16.0, -15.0, -15.0, -9.0, -12.0, -16.0, -20.0, -32.0, -37.0, -41.0, -43.0, -48.0, -52.0, -58.0, -61.2, -63.53, -66.26, -66.64, -64.5], 0.8),
    ('g', 6, 5, [59.0, 57.0, 54.0, 49.0, 44.0, 39.0, 32.0, 25.0, 18.0, 21.0, 12.0, 7.0, -2.0, 1.0, 3.0, 6.0, 14.0, 16.0, 18.0, 19.0, 16.9, 14.58, 13.10, 13.14, 13.5], 0.0),
    ('h', 6, 5, [36.0, 32.0, 28.0, 23.0, 18.0, 13.0, 8.0, 4.0, 0.0, -16.0, -12.0, -12.0, -11.0, -8.0, -6.0, -4.0, -2.0, -1.0, 1.0, 1.0, 0.7, 0.24, 3.02, 7.35, 8.9], 0.0),
    ('g', 6, 6, [-90.0, -92.0, -95.0, -98.0, -101.0, -103.0, -104.0, -106.0, -107.0, -104.0, -105.0, -107.0, -113.0, -111.0, -112.0, -111.0, -108.0, -102.0, -96.0, -93.0, -90.4, -86.36, -78.09, -70.85, -64.7], 0.9),
    ('h', 6, 6, [-69.0, -67.0, -65.0, -62.0, -57.0, -52.0, -46.0, -40.0, -33.0, -39.0, -30.0, -24.0, -17.0, -7.0, 1.0, 11.0, 17.0, 21.0, 24.0, 36.0, 43.8, 50.94, 55.40, 62.41, 68.1], 1.0),
    ('g', 7, 0, [70.0, 70.0, 71.0, 72.0, 73.0, 73.0, 74.0, 74.0, 74.0, 70.0, 65.0, 65.0, 67.0, 75.0, 72.0, 71.0, 72.0, 74.0, 77.0, 77.0, 79.0, 79.88, 80.44, 81.29, 80.6], -0.1),
    ('g', 7, 1, [-55.0, -54.0, -54.0, -54.0, -54.0, -54.0, -54.0, -53.0, -53.0, -40.0, -55.0, -56.0, -56.0, -57.0, -57.0, -56.0, -59.0, -62.0, -64.0, -72.0, -74.0, -74.46, -75.00, -75.99, -76.7], -0.2),
    ('h', 7, 1, [-45.0, -46.0, -47.0, -48.0, -49.0, -50.0, -51.0, -52.0, -52.0, -45.0, -35.0, -50.0, -55.0, -61.0, -70.0, -77.0, -82.0, -83.0, -80.0, -69.0, -64.6, -61.14, -57.80, -54.27, -51.5], 0.6),
    ('g', 7, 2, [0.0, 0.0, 1.0, 2.0, 2.0, 3.0, 4.0, 4.0, 4.0, 0.0, 2.0, 2.0, 5.0, 4.0, 1.0, 1.0, 2.0, 3.0, 2.0, 1.0, 0.0, -1.65, -4.55, -6.79, -8.2], 0.0),
    ('h', 7, 2, [-13.0, -14.0, -14.0, -14.0, -14.0, -14.0, -15.0, -17.0, -18.0, -18.0, -17.0, -24.0, -28.0, -27.0, -27.0, -26.0, -27.0, -27.0, -26.0, -25.0, -24.2, -22.57, -21.20, -19.53, -16.9], 0.6),
    ('g', 7, 3, [34.0, 33.0, 32.0, 31.0, 29.0, 27.0, 25.0, 23.0, 20.0, 0.0, 43.0, 45.0, 44.0, 39.0, 36.0, 28.0, 23.0, 20.0, 21.0, 24.0, 33.3, 38.73, 45.24, 51.82, 56.5], 0.7),
    ('h', 7, 3, [-10.0, -11.0, -12.0, -12.0, -13.0, -14.0, -14.0, -14.0, -14.0, 2.0, 3.0, 6.0, 13.0, 14.0, 18.0, 22.0, 22.0, 19.0, 15.0, 11.0, 6.2, 6.82, 6.54, 5.59, 2.2], -0.8),
    ('g', 7, 4, [-41.0, -41.0, -40.0, -38.0, -37.0, -35.0, -34.0, -33.0, -31.0, -29.0, -27.0, -20.0, -11.0, -7.0, -2.0, -1.0, -2.0, -1.0, 0.0, 4.0, 9.1, 12.30, 14.00, 15.07, 15.8], 0.1),
    ('h', 7, 4, [-1.0, 0.0, 1.0, 2.0, 4.0, 5.0, 6.0, 7.0, 7.0, 6.0, 7.0, 6.0, 9.0, 11.0, 13.0, 16.0, 16.0, 17.0, 20.0, 23.0, 24.0, 25.35, 24.96, 24.45, 23.5], -0.2),
    ('g', 7, 5, [-21.0, -20.0, -19.0, -18.0, -16.0, -14.0, -12.0, -11.0, -9.0, -10.0, -11.0, -7.0, -7.0, -3.0, -2.0, 0.0, 2.0, 4.0, 5.0, 6.0, 6.9, 9.37, 10.46, 9.32, 6.4], -0.5),
    ('h', 7, 5, [28.0, 28.0, 28.0, 28.0, 28.0, 29.0, 29.0, 29.0, 29.0, 28.0, 28.0, 29.0, 28.0, 27.0, 22.0, 18.0, 14.0, 11.0, 9.0, 11.0, 14.8, 10.93, 7.03, 3.27, -2.2], -1.1),
    ('g', 7, 6, [18.0, 18.0, 18.0, 19.0, 19.0, 19.0, 18.0, 18.0, 17.0, 15.0, 14.0, 15.0, 17.0, 18.0, 16.0, 15.0, 13.0, 11.0, 10.0, 9.0, 7.3, 5.42, 1.64, -2.88, -7.2], -0.8),
    ('h', 7, 6, [-12.0, -12.0, -13.0, -15.0, -16.0, -17.0, -18.0, -19.0, -20.0, -17.0, -14.0, -16.0, -18.0, -19.0, -20.0, -20.0, -23.0, -24.0, -25.0, -26.0, -25.4, -26.32, -27.61, -27.50, -27.2], 0.1),
    ('g', 7, 7, [6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 5.0, 29.0, -2.0, -2.0, -3.0, -5.0, -5.0, -6.0, -5.0, -2.0, -2.0, -2.0, -1.2, 1.94, 4.92, 6.61, 9.8], 0.8),
    ('h', 7, 7, [-22.0, -22.0, -22.0, -22.0, -22.0, -21.0, -20.0, -19.0, -19.0, -22.0, -13.0, -13.0, -13.0, -13.0, -13.0, -12.0, -13.0, -10.0, -8.0, -7.0, -5.8, -4.64, -3.28, -2.32, -1.8], 0.3),
    ('g', 8, 0, [11.0, 11.0, 11.0, 11.0, 11.0, 11.0, 11.0, 11.0, 11.0, 13.0, 7.0, 11.0, 10.0, 13.0, 14.0, 14.0, 18.0, 21.0, 22.0, 24.0, 24.4, 24.80, 24.41, 23.98, 23.7], 0.0),
    ('g', 8, 1, [8.0, 8.0, 8.0, 8.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 10.0, 10.0, 11.0, 11.0, 6.0, 6.0, 6.0, 4.0, 6.6, 7.62, 8.21, 8.89, 9.7], 0.1),
    ('h', 8, 1, [8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 12.0, -1.0, -1.0, 0.0, 1.0, 2.0, 4.0, 7.0, 9.0, 10.0, 11.0, 11.9, 11.20, 10.84, 10.04, 8.4], -0.2),
    ('g', 8, 2, [-4.0, -4.0, -4.0, -4.0, -3.0, -3.0, -3.0, -3.0, -3.0, -8.0, -4.0, -4.0, -1.0, -2.0, -2.0, -3.0, -4.0, -5.0, -7.0, -8.0, -9.2, -11.73, -14.50, -16.78, -17.6], -0.1),
    ('h', 8, 2, [-14.0, -15.0, -15.0, -15.0, -15.0, -15.0, -15.0, -15.0, -14.0, -21.0, -18.0, -12.0, -13.0, -14.0, -17.0, -18.0, -19.0, -17.0, -17.0, -21.0, -21.5, -20.88, -20.03, -18.26, -15.3], 0.6),
    ('g', 8, 3, [-9.0, -9.0, -9.0, -9.0, -9.0, -9.0, -9.0, -9.0, -10.0, -5.0, -8.0, -8.0, -8.0, -8.0, -9.0, -10.0, -11.0, -11.0, -11.0, -10.0, -7.9, -6.88, -5.59, -3.16, -0.5], 0.4),
    ('h', 8, 3, [7.0, 7.0, 6.0, 6.0, 6.0, 6.0, 5.0, 5.0, 5.0, 0.0, 4.0, 4.0, 4.0, 5.0, 6.0, 7.0, 6.0, 7.0, 7.0, 8.0, 8.5, 9.83, 11.83, 13.18, 12.8], -0.2),
    ('g', 8, 4, [1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 1.0, 1.0, -1.0, -3.0, -5.0, -6.0, -8.0, -9.0, -10.0, -12.0, -13.0, -14.0, -15.0, -16.6, -18.11, -19.34, -20.56, -21.1], -0.1),
    ('h', 8, 4, [-18.0, -18.0, -18.0, -18.0, -18.0, -18.0, -18.0, -18.0, -18.0, -18.0, -18.0, -19.0, -19.0, -19.0, -20.0, -20.0, -20.0, -21.0, -21.0, -21.0, -21.5, -19.71, -17.41, -14.60, -11.7], 0.5),
    ('g', 8, 5, [6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 7.0, 7.0, 7.0, 7.0, 8.0, 8.0, 8.0, 9.0, 9.0, 9.1, 10.17, 11.61, 13.33, 15.3], 0.4),
    ('h', 8, 5, [11.0, 12.0, 12.0, 12.0, 12.0, 12.0, 12.0, 11.0, 11.0, 11.0, 12.0, 12.0, 12.0, 13.0, 13.0, 13.0, 14.0, 14.0, 14.0, 15.0, 15.5, 16.22, 16.71, 16.16, 14.9], -0.3),
    ('g', 8, 6, [6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 9.36, 10.85, 11.76, 13.7], 0.3),
    ('h', 8, 6, [11.0, 11.0, 11.0, 11.0, 11.0, 11.0, 11.0, 11.0, 11.0, 11.0, 11.0, 11.0, 10.0, 10.0, 10.0, 10.0, 9.0, 9.0, 9.0, 9.0, 8.9, 7.61, 6.96, 5.69, 3.6], -0.4),
    ('g', 8, 7, [-3.0, -3.0, -3.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -5.0, 0.0, 0.0, 2.0, 1.0, 1.0, 1.0, -3.0, -4.0, -5.0, -7.0, -7.9, -11.25, -14.05, -15.98, -16.5], -0.1),
    ('h', 8, 7, [7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 0.0, 0.0, -1.0, -4.0, -5.0, -5.0, -5.0, -7.0, -9.0, -12.0, -14.9, -12.76, -10.74, -9.10, -6.9], 0.5),
    ('g', 8, 8, [-3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -12.0, -2.0, -1.0, -4.0, -5.0, -5.0, -5.0, -5.0, -5.0, -4.0, -6.0, -7.0, -4.87, -3.54, -2.02, -0.3], 0.4),
    ('h', 8, 8, [-4.0, -4.0, -4.0, -4.0, -4.0, -4.0, -4.0, -4.0, -4.0, -4.0, -10.0, -8.0, -6.0, -1.0, -2.0, -2.0, 0.0, 0.0, 0.0, -3.0, -2.1, -0.06, 1.64, 2.26, 2.8], 0.0),
    ('g', 9, 0, [8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 9.0, 9.0, 11.0, 7.0, 6.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.58, 5.50, 5.33, 5.0], 0.0),
    ('g', 9, 1, [10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 11.0, 12.0, 13.0, 13.0, 12.0, 12.0, 12.0, 10.0, 9.4, 9.76, 9.45, 8.83, 8.4], 0.0),
    ('h', 9, 1, [-21.0, -21.0, -21.0, -21.0, -21.0, -21.0, -21.0, -21.0, -21.0, -21.0, -21.0, -21.0, -21.0, -20.0, -19.0, -18.0, -20.0, -20.0, -19.0, -19.0, -19.7, -20.11, -20.54, -21.77, -23.4], 0.0),
    ('g', 9, 2, [2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 1.0, -2.0, -2.0, -2.0, 3.0, 3.0, 4.0, 2.0, 3.0, 3.58, 3.45, 3.02, 2.9], 0.0),
    ('h', 9, 2, [16.0, 16.0, 16.0, 16.0, 16.0, 16.0, 16.0, 16.0, 16.0, 16.0, 16.0, 16.0, 18.0, 17.0, 16.0, 16.0, 15.0, 15.0, 15.0, 15.0, 13.4, 12.69, 11.51, 10.76, 11.0], 0.0),
    ('g', 9, 3, [-12.0, -12.0, -12.0, -12.0, -12.0, -12.0, -12.0, -12.0, -12.0, -12.0, -12.0, -12.0, -11.0, -12.0, -12.0, -12.0, -10.0, -10.0, -10.0, -10.0, -8.4, -6.94, -5.27, -3.22, -1.5], 0.0),
    ('h', 9, 3, [6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 7.0, 7.0, 7.0, 9.0, 12.5, 12.67, 12.75, 11.74, 9.8], 0.0),
    ('g', 9, 4, [10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 6.3, 5.01, 3.13, 0.67, -1.1], 0.0),
    ('h', 9, 4, [-21.0, -21.0, -21.0, -21.0, -21.0, -21.0, -21.0, -21.0, -21.0, -21.0, -21.0, -21.0, -21.0, -18.0, -13.0, -11.0, -8.0, -6.0, -6.0, -6.0, -6.2, -6.72, -7.14, -6.74, -5.1], 0.0),
    ('g', 9, 5, [-1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -2.0, -3.0, -4.0, -5.0, -6.0, -7.0, -8.0, -8.9, -10.76, -12.38, -13.20, -13.2], 0.0),
    ('h', 9, 5, [-5.0, -5.0, -5.0, -5.0, -5.0, -5.0, -5.0, -5.0, -5.0, -5.0, -5.0, -5.0, -5.0, -6.0, -6.0, -7.0, -6.0, -6.0, -6.0, -8.0, -8.4, -8.16, -7.42, -6.88, -6.3], 0.0),
    ('g', 9, 6, [-1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -2.0, -2.0, -2.0, -3.0, -3.0, -3.0, -3.0, -1.5, -1.25, -0.76, -0.10, 1.1], 0.0),
    ('h', 9, 6, [-1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, 0.0, 0.0, 0.0, 4.0, 5.0, 6.0, 7.0, 8.4, 8.10, 7.97, 7.79, 7.8], 0.0),
    ('g', 9, 7, [4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 5.0, 6.0, 7.0, 8.0, 8.0, 9.3, 8.76, 8.43, 8.68, 8.8], 0.0),
    ('h', 9, 7, [-1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 1.0, 3.8, 2.92, 2.14, 1.04, 0.4], 0.0),
    ('g', 9, 8, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, -1.0, -2.0, -3.0, -4.0, -4.3, -6.66, -8.42, -9.06, -9.3], 0.0),
    ('h', 9, 8, [-9.0, -9.0, -9.0, -9.0, -9.0, -9.0, -9.0, -9.0, -9.0, -9.0, -9.0, -9.0, -9.0, -9.0, -9.0, -9.0, -11.0, -11.0, -11.0, -9.0, -8.2, -7.73, -6.08, -3.89, -1.4], 0.0),
    ('g', 9, 9, [-3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -7.0, -7.0, -7.0, -7.0, -8.2, -9.22, -10.08, -10.54, -11.9], 0.0),
    ('h', 9, 9, [-10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -8.0, -6.0, -4.0, -2.0, 0.0, 2.0, 4.0, 4.8, 6.01, 7.01, 8.44, 9.6], 0.0),
    ('g', 10, 0, [-4.0, -4.0, -4.0, -4.0, -4.0, -4.0, -4.0, -4.0, -4.0, -4.0, -4.0, -4.0, -4.0, -4.0, -4.0, -4.0, -4.0, -4.0, -4.0, -4.0, -2.6, -2.17, -1.94, -2.01, -1.9], 0.0),
    ('g', 10, 1, [-2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -4.0, -4.0, -4.0, -3.0, -3.0, -3.0, -4.0, -6.0, -6.12, -6.24, -6.26, -6.2], 0.0),
    ('h', 10, 1, [3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 2.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.7, 2.19, 2.73, 3.28, 3.4], 0.0),
    ('g', 10, 2, [2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 1.7, 1.42, 0.89, 0.17, -0.1], 0.0),
    ('h', 10, 2, [-3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, 0.0, 0.10, -0.10, -0.40, -0.2], 0.0),
    ('g', 10, 3, [-2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -3.0, -3.0, -3.0, -3.0, -3.1, -2.35, -1.07, 0.55, 1.7], 0.0),
    ('h', 10, 3, [4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 3.0, 3.0, 3.0, 2.0, 4.0, 4.46, 4.71, 4.55, 3.6], 0.0),
    ('g', 10, 4, [-1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5, -0.15, -0.16, -0.55, -0.9], 0.0),
    ('h', 10, 4, [3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 4.0, 4.0, 4.0, 5.0, 5.0, 5.0, 5.0, 4.9, 4.76, 4.44, 4.40, 4.8], 0.0),
    ('g', 10, 5, [2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 3.7, 3.06, 2.45, 1.70, 0.7], 0.0),
    ('h', 10, 5, [-6.0, -6.0, -6.0, -6.0, -6.0, -6.0, -6.0, -6.0, -6.0, -6.0, -6.0, -6.0, -6.0, -6.0, -6.0, -6.0, -6.0, -6.0, -6.0, -6.0, -5.9, -6.58, -7.22, -7.92, -8.6], 0.0),
    ('g', 10, 6, [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.29, -0.33, -0.67, -0.9], 0.0),
    ('h', 10, 6, [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, -1.0, -1.0, -1.0, -1.0, -1.2, -1.01, -0.96, -0.61, -0.1], 0.0),
    ('g', 10, 7, [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.06, 2.13, 2.13, 1.9], 0.0),
    ('h', 10, 7, [-3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -3.0, -2.9, -3.47, -3.95, -4.16, -4.3], 0.0),
    ('g', 10, 8, [2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.2, 3.77, 3.09, 2.33, 1.4], 0.0),
    ('h', 10, 8, [-1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.2, -0.86, -1.99, -2.85, -3.4], 0.0),
    ('g', 10, 9, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, -0.21, -1.03, -1.80, -2.4], 0.0),
    ('h', 10, 9, [-2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.2, -2.31, -1.97, -1.12, -0.1], 0.0),
    ('g', 10, 10, [-2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -1.0, -1.0, -1.0, -1.0, -1.1, -2.09, -2.80, -3.59, -3.8], 0.0),
    ('h', 10, 10, [-7.0, -7.0, -7.0, -7.0, -7.0, -7.0, -7.0, -7.0, -7.0, -7.0, -7.0, -7.0, -7.0, -7.0, -7.0, -7.0, -6.0, -6.0, -6.0, -6.0, -7.4, -7.93, -8.31, -8.72, -8.8], 0.0),
    ('g', 11, 0, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.7, 2.95, 3.05, 3.00, 3.0], 0.0),
    ('g', 11, 1, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.7, -1.60, -1.48, -1.40, -1.4], 0.0),
    ('h', 11, 1, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.1, 0.26, 0.13, 0.0, 0.0], 0.0),
    ('g', 11, 2, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.9, -1.88, -2.03, -2.30, -2.5], 0.0),
    ('h', 11, 2, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.3, 1.44, 1.67, 2.11, 2.5], 0.0),
    ('g', 11, 3, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.5, 1.44, 1.65, 2.08, 2.3], 0.0),
    ('h', 11, 3, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.9, -0.77, -0.66, -0.60, -0.6], 0.0),
    ('g', 11, 4, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.1, -0.31, -0.51, -0.79, -0.9], 0.0),
    ('h', 11, 4, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -2.6, -2.27, -1.76, -1.05, -0.4], 0.0),
    ('g', 11, 5, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.1, 0.29, 0.54, 0.58, 0.3], 0.0),
    ('h', 11, 5, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.9, 0.90, 0.85, 0.76, 0.6], 0.0),
    ('g', 11, 6, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.7, -0.79, -0.79, -0.70, -0.7], 0.0),
    ('h', 11, 6, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.7, -0.58, -0.39, -0.20, -0.2], 0.0),
    ('g', 11, 7, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.7, 0.53, 0.37, 0.14, -0.1], 0.0),
    ('h', 11, 7, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -2.8, -2.69, -2.51, -2.12, -1.7], 0.0),
    ('g', 11, 8, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.7, 1.80, 1.79, 1.70, 1.4], 0.0),
    ('h', 11, 8, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.9, -1.08, -1.27, -1.44, -1.6], 0.0),
    ('g', 11, 9, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.1, 0.16, 0.12, -0.22, -0.6], 0.0),
    ('h', 11, 9, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.2, -1.58, -2.11, -2.57, -3.0], 0.0),
    ('g', 11, 10, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.2, 0.96, 0.75, 0.44, 0.2], 0.0),
    ('h', 11, 10, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.9, -1.90, -1.94, -2.01, -2.0], 0.0),
    ('g', 11, 11, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 4.0, 3.99, 3.75, 3.49, 3.1], 0.0),
    ('h', 11, 11, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.9, -1.39, -1.86, -2.34, -2.6], 0.0),
    ('g', 12, 0, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -2.2, -2.15, -2.12, -2.09, -2.0], 0.0),
    ('g', 12, 1, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.3, -0.29, -0.21, -0.16, -0.1], 0.0),
    ('h', 12, 1, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.4, -0.55, -0.87, -1.08, -1.2], 0.0),
    ('g', 12, 2, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.2, 0.21, 0.30, 0.46, 0.5], 0.0),
    ('h', 12, 2, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.23, 0.27, 0.37, 0.5], 0.0),
    ('g', 12, 3, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.9, 0.89, 1.04, 1.23, 1.3], 0.0),
    ('h', 12, 3, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.5, 2.38, 2.13, 1.75, 1.4], 0.0),
    ('g', 12, 4, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.2, -0.38, -0.63, -0.89, -1.2], 0.0),
    ('h', 12, 4, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -2.6, -2.63, -2.49, -2.19, -1.8], 0.0),
    ('g', 12, 5, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.9, 0.96, 0.95, 0.85, 0.7], 0.0),
    ('h', 12, 5, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.7, 0.61, 0.49, 0.27, 0.1], 0.0),
    ('g', 12, 6, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5, -0.30, -0.11, 0.10, 0.3], 0.0),
    ('h', 12, 6, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.40, 0.59, 0.72, 0.8], 0.0),
    ('g', 12, 7, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.46, 0.52, 0.54, 0.5], 0.0),
    ('h', 12, 7, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.01, 0.0, -0.09, -0.2], 0.0),
    ('g', 12, 8, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.3, -0.35, -0.39, -0.37, -0.2], 0.0),
    ('h', 12, 8, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.02, 0.13, 0.29, 0.6], 0.0),
    ('g', 12, 9, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.4, -0.36, -0.37, -0.43, -0.5], 0.0),
    ('h', 12, 9, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.28, 0.27, 0.23, 0.2], 0.0),
    ('g', 12, 10, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.1, 0.08, 0.21, 0.22, 0.1], 0.0),
    ('h', 12, 10, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.9, -0.87, -0.86, -0.89, -0.9], 0.0),
    ('g', 12, 11, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.2, -0.49, -0.77, -0.94, -1.1], 0.0),
    ('h', 12, 11, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.4, -0.34, -0.23, -0.16, 0.0], 0.0),
    ('g', 12, 12, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.4, -0.08, 0.04, -0.03, -0.3], 0.0),
    ('h', 12, 12, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.8, 0.88, 0.87, 0.72, 0.5], 0.0),
    ('g', 13, 0, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.2, -0.16, -0.09, -0.02, 0.1], 0.0),
    ('g', 13, 1, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.9, -0.88, -0.89, -0.92, -0.9], 0.0),
    ('h', 13, 1, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.9, -0.76, -0.87, -0.88, -0.9], 0.0),
    ('g', 13, 2, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.30, 0.31, 0.42, 0.5], 0.0),
    ('h', 13, 2, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.2, 0.33, 0.30, 0.49, 0.6], 0.0),
    ('g', 13, 3, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.1, 0.28, 0.42, 0.63, 0.7], 0.0),
    ('h', 13, 3, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.8, 1.72, 1.66, 1.56, 1.4], 0.0),
    ('g', 13, 4, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.4, -0.43, -0.45, -0.42, -0.3], 0.0),
    ('h', 13, 4, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.4, -0.54, -0.59, -0.50, 0.4], 0.0),
    ('g', 13, 5, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.3, 1.18, 1.08, 0.96, 0.8], 0.0),
    ('h', 13, 5, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, -1.07, -1.14, -0.24, -0.1], 0.0),
    ('g', 13, 6, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.4, -0.37, -0.31, -0.19, -0.2], 0.0),
    ('h', 13, 6, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.1, -0.04, -0.07, -0.10, -0.8], 0.0),
    ('g', 13, 7, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.7, 0.75, 0.78, 0.81, 0.6], 0.0),
    ('h', 13, 7, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.7, 0.63, 0.54, -1.11, -0.9], 0.0),
    ('g', 13, 8, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.4, -0.26, -0.18, -0.13, 0.0], 0.0),
    ('h', 13, 8, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.21, 0.10, -0.07, -0.1], 0.0),
    ('g', 13, 9, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.35, 0.38, 0.38, 0.4], 0.0),
    ('h', 13, 9, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.6, 0.53, 0.49, 0.54, 0.4], 0.0),
    ('g', 13, 10, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.1, -0.05, 0.02, -0.44, -0.3], 0.0),
    ('h', 13, 10, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.38, 0.44, 0.08, 0.3], 0.0),
    ('g', 13, 11, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.4, 0.41, 0.42, 0.23, 0.1], 0.0),
    ('h', 13, 11, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.2, -0.22, -0.25, -0.26, 0.2], 0.0),
    ('g', 13, 12, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.10, -0.26, -0.25, -0.4], 0.0),
    ('h', 13, 12, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5, -0.57, -0.53, 0.15, -0.3], 0.0),
    ('g', 13, 13, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.1, -0.18, -0.26, -0.27, -0.5], 0.0),
    ('h', 13, 13, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.9, -0.82, -0.79, -0.43, -0.3], 0.0),
];

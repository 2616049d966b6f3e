// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::CountryRecord as R;

/// Canadian geographic area codes. Every other "1" number falls back to the US.
const CA_AREA_CODES: &[&str] = &[
    "204", "226", "236", "249", "250", "289", "306", "343", "365", "387", "403", "416", "418",
    "431", "437", "438", "450", "506", "514", "519", "548", "579", "581", "587", "604", "613",
    "639", "647", "672", "705", "709", "742", "778", "780", "782", "807", "819", "825", "867",
    "873", "902", "905",
];

const DO_AREA_CODES: &[&str] = &["809", "829", "849"];

const PR_AREA_CODES: &[&str] = &["787", "939"];

/// Country table in display order. The first row is the fallback country of
/// the global catalog.
pub(crate) static COUNTRIES: &[R] = &[
    R::new("Afghanistan", "af", "93").format("+.. .. ... ...."),
    R::new("Aland Islands", "ax", "358").format("+... .. ... .. ..").priority(1),
    R::new("Albania", "al", "355").format("+... .. ... ...."),
    R::new("Algeria", "dz", "213").format("+... ... .. .. .."),
    R::new("American Samoa", "as", "1684").format("+. (...) ...-...."),
    R::new("Andorra", "ad", "376").format("+... ... ..."),
    R::new("Angola", "ao", "244").format("+... ... ... ..."),
    R::new("Anguilla", "ai", "1264").format("+. (...) ...-...."),
    R::new("Antigua and Barbuda", "ag", "1268").format("+. (...) ...-...."),
    R::new("Argentina", "ar", "54").format("+.. (..) ........"),
    R::new("Armenia", "am", "374").format("+... .. ......"),
    R::new("Aruba", "aw", "297").format("+... ... ...."),
    R::new("Australia", "au", "61").format("+.. ... ... ..."),
    R::new("Austria", "at", "43").format("+.. ... ......."),
    R::new("Azerbaijan", "az", "994").format("+... (..) ... .. .."),
    R::new("Bahamas", "bs", "1242").format("+. (...) ...-...."),
    R::new("Bahrain", "bh", "973").format("+... .... ...."),
    R::new("Bangladesh", "bd", "880").format("+... ....-......"),
    R::new("Barbados", "bb", "1246").format("+. (...) ...-...."),
    R::new("Belarus", "by", "375").format("+... (..) ... .. .."),
    R::new("Belgium", "be", "32").format("+.. ... .. .. .."),
    R::new("Belize", "bz", "501").format("+... ...-...."),
    R::new("Benin", "bj", "229").format("+... .. .. .. .."),
    R::new("Bermuda", "bm", "1441").format("+. (...) ...-...."),
    R::new("Bhutan", "bt", "975").format("+... .. ... ..."),
    R::new("Bolivia", "bo", "591").format("+... . ... ...."),
    R::new("Bosnia and Herzegovina", "ba", "387").format("+... .. ... ..."),
    R::new("Botswana", "bw", "267").format("+... .. ... ..."),
    R::new("Brazil", "br", "55").format("+.. (..) ........."),
    R::new("British Indian Ocean Territory", "io", "246").format("+... ... ...."),
    R::new("British Virgin Islands", "vg", "1284").format("+. (...) ...-...."),
    R::new("Brunei", "bn", "673").format("+... ... ...."),
    R::new("Bulgaria", "bg", "359").format("+... ... ... ..."),
    R::new("Burkina Faso", "bf", "226").format("+... .. .. .. .."),
    R::new("Burundi", "bi", "257").format("+... .. .. .. .."),
    R::new("Cambodia", "kh", "855").format("+... .. ... ..."),
    R::new("Cameroon", "cm", "237").format("+... .... ...."),
    R::new("Canada", "ca", "1").format("+. (...) ...-....").priority(1).area_codes(CA_AREA_CODES),
    R::new("Cape Verde", "cv", "238").format("+... ... .. .."),
    R::new("Caribbean Netherlands", "bq", "599").format("+... ... ....").priority(1),
    R::new("Cayman Islands", "ky", "1345").format("+. (...) ...-...."),
    R::new("Central African Republic", "cf", "236").format("+... .. .. .. .."),
    R::new("Chad", "td", "235").format("+... .. .. .. .."),
    R::new("Chile", "cl", "56").format("+.. . .... ...."),
    R::new("China", "cn", "86").format("+.. ..-........."),
    R::new("Christmas Island", "cx", "61").format("+.. ... ... ...").priority(2),
    R::new("Cocos (Keeling) Islands", "cc", "61").format("+.. ... ... ...").priority(1),
    R::new("Colombia", "co", "57").format("+.. ... ... ...."),
    R::new("Comoros", "km", "269").format("+... ... .. .."),
    R::new("Congo (DRC)", "cd", "243").format("+... ... ... ..."),
    R::new("Congo (Republic)", "cg", "242").format("+... .. ... ...."),
    R::new("Cook Islands", "ck", "682").format("+... .. ..."),
    R::new("Costa Rica", "cr", "506").format("+... ....-...."),
    R::new("Cote d'Ivoire", "ci", "225").format("+... .. .. .. .."),
    R::new("Croatia", "hr", "385").format("+... .. ... ...."),
    R::new("Cuba", "cu", "53").format("+.. . ......."),
    R::new("Curacao", "cw", "599").format("+... ... ...."),
    R::new("Cyprus", "cy", "357").format("+... .. ......"),
    R::new("Czech Republic", "cz", "420").format("+... ... ... ..."),
    R::new("Denmark", "dk", "45").format("+.. .. .. .. .."),
    R::new("Djibouti", "dj", "253").format("+... .. .. .. .."),
    R::new("Dominica", "dm", "1767").format("+. (...) ...-...."),
    R::new("Dominican Republic", "do", "1").format("+. (...) ...-....").priority(2).area_codes(DO_AREA_CODES),
    R::new("Ecuador", "ec", "593").format("+... .. ... ...."),
    R::new("Egypt", "eg", "20").format("+.. ... ... ...."),
    R::new("El Salvador", "sv", "503").format("+... ....-...."),
    R::new("Equatorial Guinea", "gq", "240").format("+... ... ... ..."),
    R::new("Eritrea", "er", "291").format("+... . ... ..."),
    R::new("Estonia", "ee", "372").format("+... .... ...."),
    R::new("Ethiopia", "et", "251").format("+... .. ... ...."),
    R::new("Falkland Islands", "fk", "500").format("+... ....."),
    R::new("Faroe Islands", "fo", "298").format("+... ......"),
    R::new("Fiji", "fj", "679").format("+... ... ...."),
    R::new("Finland", "fi", "358").format("+... .. ... .. .."),
    R::new("France", "fr", "33").format("+.. . .. .. .. .."),
    R::new("French Guiana", "gf", "594").format("+... ... .. .. .."),
    R::new("French Polynesia", "pf", "689").format("+... .. .. .. .."),
    R::new("Gabon", "ga", "241").format("+... .. .. .. .."),
    R::new("Gambia", "gm", "220").format("+... ... ...."),
    R::new("Georgia", "ge", "995").format("+... ... .. .. .."),
    R::new("Germany", "de", "49").format("+.. ... ........"),
    R::new("Ghana", "gh", "233").format("+... .. ... ...."),
    R::new("Gibraltar", "gi", "350").format("+... ........"),
    R::new("Greece", "gr", "30").format("+.. ... ... ...."),
    R::new("Greenland", "gl", "299").format("+... .. .. .."),
    R::new("Grenada", "gd", "1473").format("+. (...) ...-...."),
    R::new("Guadeloupe", "gp", "590").format("+... ... .. .. .."),
    R::new("Guam", "gu", "1671").format("+. (...) ...-...."),
    R::new("Guatemala", "gt", "502").format("+... ....-...."),
    R::new("Guernsey", "gg", "44").format("+.. .... ......").priority(1),
    R::new("Guinea", "gn", "224").format("+... ... .. .. .."),
    R::new("Guinea-Bissau", "gw", "245").format("+... ... ...."),
    R::new("Guyana", "gy", "592").format("+... ... ...."),
    R::new("Haiti", "ht", "509").format("+... .. .. ...."),
    R::new("Honduras", "hn", "504").format("+... ....-...."),
    R::new("Hong Kong", "hk", "852").format("+... .... ...."),
    R::new("Hungary", "hu", "36").format("+.. .. ... ...."),
    R::new("Iceland", "is", "354").format("+... ... ...."),
    R::new("India", "in", "91").format("+.. .....-....."),
    R::new("Indonesia", "id", "62").format("+.. ...-...-...."),
    R::new("Iran", "ir", "98").format("+.. ... ... ...."),
    R::new("Iraq", "iq", "964").format("+... ... ... ...."),
    R::new("Ireland", "ie", "353").format("+... .. ......."),
    R::new("Isle of Man", "im", "44").format("+.. .... ......").priority(2),
    R::new("Israel", "il", "972").format("+... ... ... ...."),
    R::new("Italy", "it", "39").format("+.. ... .......").priority(0),
    R::new("Jamaica", "jm", "1876").format("+. (...) ...-...."),
    R::new("Japan", "jp", "81").format("+.. .. .... ...."),
    R::new("Jersey", "je", "44").format("+.. .... ......").priority(3),
    R::new("Jordan", "jo", "962").format("+... . .... ...."),
    R::new("Kazakhstan", "kz", "7").format("+. ... ...-..-..").priority(1),
    R::new("Kenya", "ke", "254").format("+... ... ......"),
    R::new("Kiribati", "ki", "686").format("+... ....."),
    R::new("Kosovo", "xk", "383").format("+... .. ... ..."),
    R::new("Kuwait", "kw", "965").format("+... .... ...."),
    R::new("Kyrgyzstan", "kg", "996").format("+... ... ... ..."),
    R::new("Laos", "la", "856").format("+... .. .. ... ..."),
    R::new("Latvia", "lv", "371").format("+... .. ... ..."),
    R::new("Lebanon", "lb", "961").format("+... .. ... ..."),
    R::new("Lesotho", "ls", "266").format("+... .... ...."),
    R::new("Liberia", "lr", "231").format("+... ... ... ..."),
    R::new("Libya", "ly", "218").format("+... ..-......."),
    R::new("Liechtenstein", "li", "423").format("+... ... .. .."),
    R::new("Lithuania", "lt", "370").format("+... ... ....."),
    R::new("Luxembourg", "lu", "352").format("+... ... ... ..."),
    R::new("Macau", "mo", "853").format("+... .... ...."),
    R::new("Macedonia", "mk", "389").format("+... .. ... ..."),
    R::new("Madagascar", "mg", "261").format("+... .. .. ... .."),
    R::new("Malawi", "mw", "265").format("+... ... .. .. .."),
    R::new("Malaysia", "my", "60").format("+.. ..-.... ...."),
    R::new("Maldives", "mv", "960").format("+... ...-...."),
    R::new("Mali", "ml", "223").format("+... .. .. .. .."),
    R::new("Malta", "mt", "356").format("+... .... ...."),
    R::new("Marshall Islands", "mh", "692").format("+... ...-...."),
    R::new("Martinique", "mq", "596").format("+... ... .. .. .."),
    R::new("Mauritania", "mr", "222").format("+... .. .. .. .."),
    R::new("Mauritius", "mu", "230").format("+... .... ...."),
    R::new("Mayotte", "yt", "262").format("+... ... .. .. ..").priority(1),
    R::new("Mexico", "mx", "52").format("+.. ... ... ...."),
    R::new("Micronesia", "fm", "691").format("+... ... ...."),
    R::new("Moldova", "md", "373").format("+... (..) ..-..-.."),
    R::new("Monaco", "mc", "377").format("+... .. .. .. .."),
    R::new("Mongolia", "mn", "976").format("+... .. .. ...."),
    R::new("Montenegro", "me", "382").format("+... .. ... ..."),
    R::new("Montserrat", "ms", "1664").format("+. (...) ...-...."),
    R::new("Morocco", "ma", "212").format("+... ...-......"),
    R::new("Mozambique", "mz", "258").format("+... .. ... ...."),
    R::new("Myanmar", "mm", "95").format("+.. . ... ...."),
    R::new("Namibia", "na", "264").format("+... .. ... ...."),
    R::new("Nauru", "nr", "674").format("+... ... ...."),
    R::new("Nepal", "np", "977").format("+... ...-......."),
    R::new("Netherlands", "nl", "31").format("+.. .. ........"),
    R::new("New Caledonia", "nc", "687").format("+... .. .. .."),
    R::new("New Zealand", "nz", "64").format("+.. ...-...-...."),
    R::new("Nicaragua", "ni", "505").format("+... .... ...."),
    R::new("Niger", "ne", "227").format("+... .. .. .. .."),
    R::new("Nigeria", "ng", "234").format("+... ... ... ...."),
    R::new("Niue", "nu", "683").format("+... ...."),
    R::new("Norfolk Island", "nf", "672").format("+... .. ...."),
    R::new("North Korea", "kp", "850").format("+... ... ... ...."),
    R::new("Northern Mariana Islands", "mp", "1670").format("+. (...) ...-...."),
    R::new("Norway", "no", "47").format("+.. ... .. ..."),
    R::new("Oman", "om", "968").format("+... .... ...."),
    R::new("Pakistan", "pk", "92").format("+.. ...-......."),
    R::new("Palau", "pw", "680").format("+... ... ...."),
    R::new("Palestine", "ps", "970").format("+... ... ... ..."),
    R::new("Panama", "pa", "507").format("+... ....-...."),
    R::new("Papua New Guinea", "pg", "675").format("+... ... ...."),
    R::new("Paraguay", "py", "595").format("+... ... ......"),
    R::new("Peru", "pe", "51").format("+.. ... ... ..."),
    R::new("Philippines", "ph", "63").format("+.. ... ...."),
    R::new("Poland", "pl", "48").format("+.. ...-...-..."),
    R::new("Portugal", "pt", "351").format("+... ... ... ..."),
    R::new("Puerto Rico", "pr", "1").format("+. (...) ...-....").priority(3).area_codes(PR_AREA_CODES),
    R::new("Qatar", "qa", "974").format("+... .... ...."),
    R::new("Reunion", "re", "262").format("+... ... .. .. .."),
    R::new("Romania", "ro", "40").format("+.. ... ... ..."),
    R::new("Russia", "ru", "7").format("+. (...) ...-..-..").priority(0),
    R::new("Rwanda", "rw", "250").format("+... ... ... ..."),
    R::new("Saint Barthelemy", "bl", "590").format("+... ... .. .. ..").priority(1),
    R::new("Saint Helena", "sh", "290").format("+... ...."),
    R::new("Saint Kitts and Nevis", "kn", "1869").format("+. (...) ...-...."),
    R::new("Saint Lucia", "lc", "1758").format("+. (...) ...-...."),
    R::new("Saint Martin", "mf", "590").format("+... ... .. .. ..").priority(2),
    R::new("Saint Pierre and Miquelon", "pm", "508").format("+... .. .. .."),
    R::new("Saint Vincent and the Grenadines", "vc", "1784").format("+. (...) ...-...."),
    R::new("Samoa", "ws", "685").format("+... .. ....."),
    R::new("San Marino", "sm", "378").format("+... .... ......"),
    R::new("Sao Tome and Principe", "st", "239").format("+... ... ...."),
    R::new("Saudi Arabia", "sa", "966").format("+... .. ... ...."),
    R::new("Senegal", "sn", "221").format("+... .. ... .. .."),
    R::new("Serbia", "rs", "381").format("+... .. ... ...."),
    R::new("Seychelles", "sc", "248").format("+... . ... ..."),
    R::new("Sierra Leone", "sl", "232").format("+... .. ......"),
    R::new("Singapore", "sg", "65").format("+.. ....-...."),
    R::new("Sint Maarten", "sx", "1721").format("+. (...) ...-...."),
    R::new("Slovakia", "sk", "421").format("+... ... ... ..."),
    R::new("Slovenia", "si", "386").format("+... .. ... ..."),
    R::new("Solomon Islands", "sb", "677").format("+... ....."),
    R::new("Somalia", "so", "252").format("+... . ......"),
    R::new("South Africa", "za", "27").format("+.. .. ... ...."),
    R::new("South Korea", "kr", "82").format("+.. ..-....-...."),
    R::new("South Sudan", "ss", "211").format("+... .. ... ...."),
    R::new("Spain", "es", "34").format("+.. ... ... ..."),
    R::new("Sri Lanka", "lk", "94").format("+.. .. ... ...."),
    R::new("Sudan", "sd", "249").format("+... .. ... ...."),
    R::new("Suriname", "sr", "597").format("+... ...-...."),
    R::new("Svalbard and Jan Mayen", "sj", "47").format("+.. ... .. ...").priority(1),
    R::new("Swaziland", "sz", "268").format("+... .... ...."),
    R::new("Sweden", "se", "46").format("+.. .. ... .. .."),
    R::new("Switzerland", "ch", "41").format("+.. .. ... .. .."),
    R::new("Syria", "sy", "963").format("+... ... ... ..."),
    R::new("Taiwan", "tw", "886").format("+... . .... ...."),
    R::new("Tajikistan", "tj", "992").format("+... .. ... ...."),
    R::new("Tanzania", "tz", "255").format("+... ... ... ..."),
    R::new("Thailand", "th", "66").format("+.. .. ... ...."),
    R::new("Timor-Leste", "tl", "670").format("+... .... ...."),
    R::new("Togo", "tg", "228").format("+... .. .. .. .."),
    R::new("Tokelau", "tk", "690").format("+... ...."),
    R::new("Tonga", "to", "676").format("+... ....."),
    R::new("Trinidad and Tobago", "tt", "1868").format("+. (...) ...-...."),
    R::new("Tunisia", "tn", "216").format("+... .. ... ..."),
    R::new("Turkey", "tr", "90").format("+.. ... ... .. .."),
    R::new("Turkmenistan", "tm", "993").format("+... .. ......"),
    R::new("Turks and Caicos Islands", "tc", "1649").format("+. (...) ...-...."),
    R::new("Tuvalu", "tv", "688").format("+... ....."),
    R::new("U.S. Virgin Islands", "vi", "1340").format("+. (...) ...-...."),
    R::new("Uganda", "ug", "256").format("+... ... ......"),
    R::new("Ukraine", "ua", "380").format("+... (..) ... .. .."),
    R::new("United Arab Emirates", "ae", "971").format("+... .. ... ...."),
    R::new("United Kingdom", "gb", "44").format("+.. .... ......").priority(0),
    R::new("United States", "us", "1").format("+. (...) ...-....").priority(0),
    R::new("Uruguay", "uy", "598").format("+... .... ...."),
    R::new("Uzbekistan", "uz", "998").format("+... .. ... .. .."),
    R::new("Vanuatu", "vu", "678").format("+... ....."),
    R::new("Vatican City", "va", "39").format("+.. .. .... ....").priority(1),
    R::new("Venezuela", "ve", "58").format("+.. ...-......."),
    R::new("Vietnam", "vn", "84").format("+.. .. .... ...."),
    R::new("Wallis and Futuna", "wf", "681").format("+... .. .. .."),
    R::new("Western Sahara", "eh", "212").format("+... ...-......").priority(1),
    R::new("Yemen", "ye", "967").format("+... ... ... ..."),
    R::new("Zambia", "zm", "260").format("+... .. ......."),
    R::new("Zimbabwe", "zw", "263").format("+... .. ... ...."),
];
